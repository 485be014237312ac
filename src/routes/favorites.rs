use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::CurrentUser;
use crate::models::favorites::requests::AddFavoriteRequest;
use crate::services::FavoriteService;
use crate::utils::SafeCourseIdI64;

// 懒加载的全局 FavoriteService 实例
static FAVORITE_SERVICE: Lazy<FavoriteService> = Lazy::new(FavoriteService::new_lazy);

// HTTP处理程序
pub async fn list_favorites(req: HttpRequest, user: CurrentUser) -> ActixResult<HttpResponse> {
    FAVORITE_SERVICE.list_favorites(user.id(), &req).await
}

pub async fn add_favorite(
    req: HttpRequest,
    user: CurrentUser,
    body: web::Json<AddFavoriteRequest>,
) -> ActixResult<HttpResponse> {
    FAVORITE_SERVICE
        .add_favorite(user.id(), body.into_inner(), &req)
        .await
}

pub async fn remove_favorite(
    req: HttpRequest,
    user: CurrentUser,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    FAVORITE_SERVICE
        .remove_favorite(user.id(), course_id.0, &req)
        .await
}

pub async fn check_favorite(
    req: HttpRequest,
    user: CurrentUser,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    FAVORITE_SERVICE
        .check_favorite(user.id(), course_id.0, &req)
        .await
}

// 配置路由
pub fn configure_favorite_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/favorites")
            .route("", web::get().to(list_favorites))
            .route("", web::post().to(add_favorite))
            .route("/{course_id}", web::delete().to(remove_favorite))
            .route("/{course_id}/check", web::get().to(check_favorite)),
    );
}
