use super::SeaOrmStorage;
use crate::entity::users::{ActiveModel, Column, Entity as Users};
use crate::errors::{DiscoveryError, Result};
use crate::models::users::{entities::User, requests::UpsertUserRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, SqlErr};
use tracing::debug;

impl SeaOrmStorage {
    /// 通过 ID 获取用户
    pub async fn get_user_impl(&self, id: &str) -> Result<Option<User>> {
        let result = Users::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询用户失败", e))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 写入用户
    ///
    /// 先尝试插入；主键冲突时改为更新资料字段，后写入者生效。
    pub async fn upsert_user_impl(&self, req: UpsertUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(req.id.clone()),
            email: Set(req.email.clone()),
            first_name: Set(req.first_name.clone()),
            last_name: Set(req.last_name.clone()),
            profile_image_url: Set(req.profile_image_url.clone()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match model.insert(&self.db).await {
            Ok(created) => Ok(created.into_user()),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                debug!("User {} already exists, updating profile", req.id);
                self.update_user_profile_impl(req, now).await
            }
            Err(e) => Err(DiscoveryError::from_db("创建用户失败", e)),
        }
    }

    /// 更新用户资料字段
    async fn update_user_profile_impl(&self, req: UpsertUserRequest, now: i64) -> Result<User> {
        let model = ActiveModel {
            id: Set(req.id),
            email: Set(req.email),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            profile_image_url: Set(req.profile_image_url),
            updated_at: Set(now),
            ..Default::default()
        };

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("更新用户失败", e))?;

        Ok(updated.into_user())
    }

    /// 列出全部用户（最新优先）
    pub async fn get_users_impl(&self) -> Result<Vec<User>> {
        let users = Users::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询用户列表失败", e))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::users::requests::UpsertUserRequest;
    use crate::storage::Storage;

    fn upsert(id: &str, first_name: &str, email: Option<&str>) -> UpsertUserRequest {
        UpsertUserRequest {
            id: id.to_string(),
            email: email.map(str::to_string),
            first_name: Some(first_name.to_string()),
            last_name: Some("Smith".to_string()),
            profile_image_url: None,
        }
    }

    #[tokio::test]
    async fn test_get_missing_user() {
        let storage = memory_storage().await;
        assert!(storage.get_user("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upsert_inserts_new_user() {
        let storage = memory_storage().await;
        let user = storage
            .upsert_user(upsert("u-1", "Alice", Some("alice@example.com")))
            .await
            .unwrap();

        assert_eq!(user.id, "u-1");
        assert_eq!(user.first_name.as_deref(), Some("Alice"));

        let fetched = storage.get_user("u-1").await.unwrap().unwrap();
        assert_eq!(fetched, user);
    }

    #[tokio::test]
    async fn test_upsert_twice_keeps_one_row_with_latest_fields() {
        let storage = memory_storage().await;
        storage
            .upsert_user(upsert("u-1", "Alice", Some("alice@example.com")))
            .await
            .unwrap();
        let second = storage
            .upsert_user(upsert("u-1", "Alicia", None))
            .await
            .unwrap();

        assert_eq!(second.first_name.as_deref(), Some("Alicia"));
        assert_eq!(second.email, None);

        let users = storage.get_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].first_name.as_deref(), Some("Alicia"));
        assert_eq!(users[0].email, None);
    }

    #[tokio::test]
    async fn test_users_newest_first() {
        let storage = memory_storage().await;
        storage
            .upsert_user(upsert("u-1", "Alice", None))
            .await
            .unwrap();
        storage
            .upsert_user(upsert("u-2", "Bob", None))
            .await
            .unwrap();
        storage
            .upsert_user(upsert("u-3", "Carol", None))
            .await
            .unwrap();

        let ids: Vec<String> = storage
            .get_users()
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec!["u-3", "u-2", "u-1"]);
    }
}
