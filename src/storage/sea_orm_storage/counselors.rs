//! 顾问存储操作

use super::SeaOrmStorage;
use crate::entity::counselors::{ActiveModel, Column, Entity as Counselors};
use crate::errors::{DiscoveryError, Result};
use crate::models::counselors::{entities::Counselor, requests::CreateCounselorRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出在职顾问
    pub async fn get_counselors_impl(&self) -> Result<Vec<Counselor>> {
        let counselors = Counselors::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询顾问列表失败", e))?;

        Ok(counselors.into_iter().map(|m| m.into_counselor()).collect())
    }

    /// 创建顾问，默认在职
    pub async fn create_counselor_impl(&self, req: CreateCounselorRequest) -> Result<Counselor> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            title: Set(req.title),
            specialization: Set(req.specialization),
            email: Set(req.email),
            phone: Set(req.phone),
            bio: Set(req.bio),
            image_url: Set(req.image_url),
            is_active: Set(req.is_active.unwrap_or(true)),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("创建顾问失败", e))?;

        Ok(result.into_counselor())
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::counselors::requests::CreateCounselorRequest;
    use crate::storage::Storage;

    fn counselor(name: &str, is_active: Option<bool>) -> CreateCounselorRequest {
        CreateCounselorRequest {
            name: name.to_string(),
            title: Some("Senior Advisor".to_string()),
            specialization: Some("UK admissions".to_string()),
            email: None,
            phone: None,
            bio: None,
            image_url: None,
            is_active,
        }
    }

    #[tokio::test]
    async fn test_only_active_counselors_listed() {
        let storage = memory_storage().await;
        let active = storage.create_counselor(counselor("Emma", None)).await.unwrap();
        storage
            .create_counselor(counselor("Oliver", Some(false)))
            .await
            .unwrap();

        assert!(active.is_active);
        let listed = storage.get_counselors().await.unwrap();
        assert_eq!(listed, vec![active]);
    }
}
