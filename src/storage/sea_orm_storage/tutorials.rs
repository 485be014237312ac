//! 教程存储操作

use super::SeaOrmStorage;
use crate::entity::tutorials::{ActiveModel, Column, Entity as Tutorials};
use crate::errors::{DiscoveryError, Result};
use crate::models::tutorials::{entities::Tutorial, requests::CreateTutorialRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::error;

impl SeaOrmStorage {
    /// 列出启用的教程，按分类顺序与分类内顺序排列
    ///
    /// 查询失败时记录原始错误，对外只返回通用错误信息。
    pub async fn get_tutorials_impl(&self) -> Result<Vec<Tutorial>> {
        let tutorials = Tutorials::find()
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::CategoryOrder)
            .order_by_asc(Column::SortOrder)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Error fetching tutorials: {}", e);
                DiscoveryError::database_operation("Failed to fetch tutorials")
            })?;

        Ok(tutorials.into_iter().map(|m| m.into_tutorial()).collect())
    }

    /// 创建教程，默认启用
    pub async fn create_tutorial_impl(&self, req: CreateTutorialRequest) -> Result<Tutorial> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            video_url: Set(req.video_url),
            category: Set(req.category),
            category_order: Set(req.category_order),
            sort_order: Set(req.sort_order),
            is_active: Set(req.is_active.unwrap_or(true)),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("创建教程失败", e))?;

        Ok(result.into_tutorial())
    }
}

#[cfg(test)]
mod tests {
    use super::super::memory_storage;
    use crate::models::tutorials::requests::CreateTutorialRequest;
    use crate::storage::Storage;
    use sea_orm::ConnectionTrait;

    fn tutorial(
        title: &str,
        category_order: i32,
        sort_order: i32,
        is_active: Option<bool>,
    ) -> CreateTutorialRequest {
        CreateTutorialRequest {
            title: title.to_string(),
            description: None,
            video_url: Some("https://video.example.com/v".to_string()),
            category: format!("Category {category_order}"),
            category_order,
            sort_order,
            is_active,
        }
    }

    #[tokio::test]
    async fn test_tutorials_ordered_and_active_only() {
        let storage = memory_storage().await;
        storage
            .create_tutorial(tutorial("Visa interview", 2, 1, None))
            .await
            .unwrap();
        storage
            .create_tutorial(tutorial("Personal statement", 1, 2, None))
            .await
            .unwrap();
        storage
            .create_tutorial(tutorial("Choosing a course", 1, 1, None))
            .await
            .unwrap();
        storage
            .create_tutorial(tutorial("Old video", 1, 0, Some(false)))
            .await
            .unwrap();

        let titles: Vec<String> = storage
            .get_tutorials()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Choosing a course", "Personal statement", "Visa interview"]
        );
    }

    #[tokio::test]
    async fn test_fetch_failure_is_generic() {
        let storage = memory_storage().await;
        storage
            .db
            .execute_unprepared("DROP TABLE tutorials")
            .await
            .unwrap();

        let err = storage.get_tutorials().await.unwrap_err();
        assert_eq!(err.message(), "Failed to fetch tutorials");
    }
}
