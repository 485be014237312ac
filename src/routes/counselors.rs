use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::counselors::requests::CreateCounselorRequest;
use crate::services::CounselorService;

static COUNSELOR_SERVICE: Lazy<CounselorService> = Lazy::new(CounselorService::new_lazy);

pub async fn list_counselors(req: HttpRequest) -> ActixResult<HttpResponse> {
    COUNSELOR_SERVICE.list_counselors(&req).await
}

pub async fn create_counselor(
    req: HttpRequest,
    counselor: web::Json<CreateCounselorRequest>,
) -> ActixResult<HttpResponse> {
    COUNSELOR_SERVICE
        .create_counselor(counselor.into_inner(), &req)
        .await
}

pub fn configure_counselor_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/counselors")
            .route("", web::get().to(list_counselors))
            .route("", web::post().to(create_counselor)),
    );
}
