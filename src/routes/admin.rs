use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::AdminService;

static ADMIN_SERVICE: Lazy<AdminService> = Lazy::new(AdminService::new_lazy);

pub async fn list_users(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_users(&req).await
}

pub async fn list_applications(req: HttpRequest) -> ActixResult<HttpResponse> {
    ADMIN_SERVICE.list_applications(&req).await
}

pub fn configure_admin_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .route("/users", web::get().to(list_users))
            .route("/applications", web::get().to(list_applications)),
    );
}
