use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::{DiscoveryError, Result};
use crate::models::favorites::{
    requests::AddFavoriteRequest, responses::FavoriteStatusResponse,
};
use crate::storage::Storage;

pub struct FavoriteService {
    storage: Option<Arc<dyn Storage>>,
}

impl FavoriteService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 获取用户收藏
    pub async fn list_favorites(
        &self,
        user_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        let favorites = storage.get_user_favorites(user_id).await?;
        Ok(HttpResponse::Ok().json(favorites))
    }

    // 添加收藏
    pub async fn add_favorite(
        &self,
        user_id: &str,
        req: AddFavoriteRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        if req.course_id <= 0 {
            return Err(DiscoveryError::validation("courseId must be a positive integer").into());
        }

        let storage = self.get_storage(request)?;

        if storage.get_course_by_id(req.course_id).await?.is_none() {
            return Err(DiscoveryError::not_found("Course not found").into());
        }

        let favorite = storage.add_to_favorites(user_id, req.course_id).await?;
        Ok(HttpResponse::Created().json(favorite))
    }

    // 取消收藏
    pub async fn remove_favorite(
        &self,
        user_id: &str,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        storage.remove_from_favorites(user_id, course_id).await?;
        Ok(HttpResponse::NoContent().finish())
    }

    // 查询收藏状态
    pub async fn check_favorite(
        &self,
        user_id: &str,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        let is_favorite = storage.is_favorite(user_id, course_id).await?;
        Ok(HttpResponse::Ok().json(FavoriteStatusResponse { is_favorite }))
    }
}
