use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::courses::requests::CreateCourseRequest;

pub async fn create_course(
    service: &CourseService,
    course: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    crate::services::require_text("name", &course.name)?;

    let storage = service.get_storage(request)?;

    let created = storage.create_course(course).await?;
    Ok(HttpResponse::Created().json(created))
}
