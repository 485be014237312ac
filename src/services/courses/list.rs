use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::requests::CourseListParams;

pub async fn list_courses(
    service: &CourseService,
    query: CourseListParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let filters = query.filters();

    let courses = match query.page() {
        Some((limit, offset)) => storage.get_courses_paginated(filters, limit, offset).await?,
        None => storage.get_courses(filters).await?,
    };

    Ok(HttpResponse::Ok().json(courses))
}
