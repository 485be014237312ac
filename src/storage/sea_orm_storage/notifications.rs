//! 通知存储操作

use super::SeaOrmStorage;
use crate::entity::notifications::{ActiveModel, Column, Entity as Notifications};
use crate::errors::{DiscoveryError, Result};
use crate::models::notifications::{
    entities::{DEFAULT_NOTIFICATION_TYPE, Notification},
    requests::CreateNotificationRequest,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};

impl SeaOrmStorage {
    /// 列出用户通知（最新优先）
    pub async fn get_user_notifications_impl(&self, user_id: &str) -> Result<Vec<Notification>> {
        let notifications = Notifications::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询通知列表失败", e))?;

        Ok(notifications
            .into_iter()
            .map(|m| m.into_notification())
            .collect())
    }

    /// 创建通知
    pub async fn create_notification_impl(
        &self,
        req: CreateNotificationRequest,
    ) -> Result<Notification> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            title: Set(req.title),
            message: Set(req.message),
            notification_type: Set(req
                .notification_type
                .unwrap_or_else(|| DEFAULT_NOTIFICATION_TYPE.to_string())),
            is_read: Set(false),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("创建通知失败", e))?;

        Ok(result.into_notification())
    }

    /// 标记通知已读（幂等，不存在时无操作）
    pub async fn mark_notification_as_read_impl(&self, id: i64) -> Result<()> {
        Notifications::update_many()
            .col_expr(Column::IsRead, Expr::value(true))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("标记通知已读失败", e))?;

        Ok(())
    }

    /// 统计用户未读通知数
    pub async fn get_unread_notification_count_impl(&self, user_id: &str) -> Result<u64> {
        Notifications::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::IsRead.eq(false))
            .count(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("统计未读通知失败", e))
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::notifications::requests::CreateNotificationRequest;
    use crate::storage::Storage;

    fn notification(user_id: &str, title: &str) -> CreateNotificationRequest {
        CreateNotificationRequest {
            user_id: user_id.to_string(),
            title: title.to_string(),
            message: "Your application has been received".to_string(),
            notification_type: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_newest_first() {
        let storage = memory_storage().await;
        let first = storage
            .create_notification(notification("u-1", "First"))
            .await
            .unwrap();
        let second = storage
            .create_notification(notification("u-1", "Second"))
            .await
            .unwrap();
        storage
            .create_notification(notification("u-2", "Other"))
            .await
            .unwrap();

        assert_eq!(first.notification_type, "info");
        assert!(!first.is_read);

        let listed = storage.get_user_notifications("u-1").await.unwrap();
        assert_eq!(listed, vec![second, first]);
    }

    #[tokio::test]
    async fn test_mark_as_read_is_idempotent() {
        let storage = memory_storage().await;
        let target = storage
            .create_notification(notification("u-1", "A"))
            .await
            .unwrap();
        storage
            .create_notification(notification("u-1", "B"))
            .await
            .unwrap();

        assert_eq!(storage.get_unread_notification_count("u-1").await.unwrap(), 2);

        storage.mark_notification_as_read(target.id).await.unwrap();
        assert_eq!(storage.get_unread_notification_count("u-1").await.unwrap(), 1);

        storage.mark_notification_as_read(target.id).await.unwrap();
        assert_eq!(storage.get_unread_notification_count("u-1").await.unwrap(), 1);

        let listed = storage.get_user_notifications("u-1").await.unwrap();
        let marked = listed.iter().find(|n| n.id == target.id).unwrap();
        assert!(marked.is_read);

        // 不存在的 ID 不报错
        storage.mark_notification_as_read(9999).await.unwrap();
    }
}
