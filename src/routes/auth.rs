use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::CurrentUser;
use crate::models::users::requests::UserProfileRequest;
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

// HTTP处理程序
pub async fn get_current_user(req: HttpRequest, user: CurrentUser) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_current_user(user.id(), &req).await
}

pub async fn upsert_current_user(
    req: HttpRequest,
    user: CurrentUser,
    profile: web::Json<UserProfileRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .upsert_current_user(user.id(), profile.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/user", web::get().to(get_current_user))
            .route("/user", web::post().to(upsert_current_user)),
    );
}
