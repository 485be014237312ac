use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::CurrentUser;
use crate::models::applications::requests::{
    SubmitApplicationRequest, UpdateApplicationStatusRequest,
};
use crate::services::ApplicationService;
use crate::utils::SafeIDI64;

static APPLICATION_SERVICE: Lazy<ApplicationService> = Lazy::new(ApplicationService::new_lazy);

pub async fn list_applications(req: HttpRequest, user: CurrentUser) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE.list_applications(user.id(), &req).await
}

pub async fn submit_application(
    req: HttpRequest,
    user: CurrentUser,
    submission: web::Json<SubmitApplicationRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .submit_application(user.id(), submission.into_inner(), &req)
        .await
}

pub async fn update_application_status(
    req: HttpRequest,
    application_id: SafeIDI64,
    update: web::Json<UpdateApplicationStatusRequest>,
) -> ActixResult<HttpResponse> {
    APPLICATION_SERVICE
        .update_status(application_id.0, update.into_inner(), &req)
        .await
}

pub fn configure_application_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/applications")
            .route("", web::get().to(list_applications))
            .route("", web::post().to(submit_application))
            .route("/{id}/status", web::patch().to(update_application_status)),
    );
}
