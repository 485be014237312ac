use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::universities::requests::CreateUniversityRequest;
use crate::services::UniversityService;

static UNIVERSITY_SERVICE: Lazy<UniversityService> = Lazy::new(UniversityService::new_lazy);

pub async fn list_universities(req: HttpRequest) -> ActixResult<HttpResponse> {
    UNIVERSITY_SERVICE.list_universities(&req).await
}

pub async fn create_university(
    req: HttpRequest,
    university: web::Json<CreateUniversityRequest>,
) -> ActixResult<HttpResponse> {
    UNIVERSITY_SERVICE
        .create_university(university.into_inner(), &req)
        .await
}

pub fn configure_university_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/universities")
            .route("", web::get().to(list_universities))
            .route("", web::post().to(create_university)),
    );
}
