use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::tutorials::requests::CreateTutorialRequest;
use crate::services::TutorialService;

static TUTORIAL_SERVICE: Lazy<TutorialService> = Lazy::new(TutorialService::new_lazy);

pub async fn list_tutorials(req: HttpRequest) -> ActixResult<HttpResponse> {
    TUTORIAL_SERVICE.list_tutorials(&req).await
}

pub async fn create_tutorial(
    req: HttpRequest,
    tutorial: web::Json<CreateTutorialRequest>,
) -> ActixResult<HttpResponse> {
    TUTORIAL_SERVICE
        .create_tutorial(tutorial.into_inner(), &req)
        .await
}

pub fn configure_tutorial_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/tutorials")
            .route("", web::get().to(list_tutorials))
            .route("", web::post().to(create_tutorial)),
    );
}
