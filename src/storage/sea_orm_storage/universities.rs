//! 大学存储操作

use super::SeaOrmStorage;
use crate::entity::universities::{ActiveModel, Column, Entity as Universities};
use crate::errors::{DiscoveryError, Result};
use crate::models::universities::{entities::University, requests::CreateUniversityRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出全部大学
    pub async fn get_universities_impl(&self) -> Result<Vec<University>> {
        let universities = Universities::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询大学列表失败", e))?;

        Ok(universities
            .into_iter()
            .map(|m| m.into_university())
            .collect())
    }

    /// 创建大学
    pub async fn create_university_impl(
        &self,
        req: CreateUniversityRequest,
    ) -> Result<University> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            country: Set(req.country),
            location: Set(req.location),
            ranking: Set(req.ranking),
            description: Set(req.description),
            website: Set(req.website),
            logo_url: Set(req.logo_url),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("创建大学失败", e))?;

        Ok(result.into_university())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::super::memory_storage;
    use crate::models::universities::requests::CreateUniversityRequest;
    use crate::storage::Storage;

    pub(crate) fn university(name: &str) -> CreateUniversityRequest {
        CreateUniversityRequest {
            name: name.to_string(),
            country: Some("United Kingdom".to_string()),
            location: Some("London".to_string()),
            ranking: Some(10),
            description: None,
            website: None,
            logo_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_list_universities() {
        let storage = memory_storage().await;
        let first = storage
            .create_university(university("Imperial College"))
            .await
            .unwrap();
        let second = storage
            .create_university(university("King's College"))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "Imperial College");

        let listed = storage.get_universities().await.unwrap();
        assert_eq!(listed, vec![first, second]);
    }
}
