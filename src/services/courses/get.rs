use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::errors::DiscoveryError;

pub async fn get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_course_by_id(course_id).await? {
        Some(course) => Ok(HttpResponse::Ok().json(course)),
        None => Err(DiscoveryError::not_found("Course not found").into()),
    }
}
