use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::notifications::{
    requests::CreateNotificationRequest, responses::UnreadCountResponse,
};
use crate::storage::Storage;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 获取用户通知
    pub async fn list_notifications(
        &self,
        user_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        let notifications = storage.get_user_notifications(user_id).await?;
        Ok(HttpResponse::Ok().json(notifications))
    }

    // 创建通知
    pub async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        super::require_text("userId", &notification.user_id)?;
        super::require_text("title", &notification.title)?;

        let storage = self.get_storage(request)?;
        let created = storage.create_notification(notification).await?;
        Ok(HttpResponse::Created().json(created))
    }

    // 未读数量
    pub async fn unread_count(
        &self,
        user_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        let count = storage.get_unread_notification_count(user_id).await?;
        Ok(HttpResponse::Ok().json(UnreadCountResponse { count }))
    }

    // 标记已读，不校验归属
    pub async fn mark_as_read(
        &self,
        notification_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        storage.mark_notification_as_read(notification_id).await?;
        Ok(HttpResponse::NoContent().finish())
    }
}
