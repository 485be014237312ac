//! 收藏存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::favorites::{ActiveModel, Column, Entity as Favorites};
use crate::entity::universities::Entity as Universities;
use crate::errors::{DiscoveryError, Result};
use crate::models::courses::entities::CourseWithUniversity;
use crate::models::favorites::entities::{Favorite, FavoriteWithCourse};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 列出用户收藏（含课程与大学，最新优先）
    ///
    /// 课程通过一次 IN 查询批量加载；课程已被删除的收藏会被跳过。
    pub async fn get_user_favorites_impl(&self, user_id: &str) -> Result<Vec<FavoriteWithCourse>> {
        let favorites = Favorites::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询收藏列表失败", e))?;

        if favorites.is_empty() {
            return Ok(Vec::new());
        }

        let mut course_ids: Vec<i64> = favorites.iter().map(|f| f.course_id).collect();
        course_ids.sort_unstable();
        course_ids.dedup();

        let courses: HashMap<i64, CourseWithUniversity> = Courses::find()
            .filter(CourseColumn::Id.is_in(course_ids))
            .find_also_related(Universities)
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询收藏课程失败", e))?
            .into_iter()
            .map(|(course, university)| (course.id, course.with_university(university)))
            .collect();

        Ok(favorites
            .into_iter()
            .filter_map(|favorite| {
                let course = courses.get(&favorite.course_id)?.clone();
                Some(FavoriteWithCourse {
                    favorite: favorite.into_favorite(),
                    course,
                })
            })
            .collect())
    }

    /// 添加收藏，重复收藏返回冲突错误
    pub async fn add_to_favorites_impl(&self, user_id: &str, course_id: i64) -> Result<Favorite> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id.to_string()),
            course_id: Set(course_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("添加收藏失败", e))?;

        Ok(result.into_favorite())
    }

    /// 取消收藏，不存在时无操作
    pub async fn remove_from_favorites_impl(&self, user_id: &str, course_id: i64) -> Result<()> {
        Favorites::delete_many()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .exec(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("取消收藏失败", e))?;

        Ok(())
    }

    /// 检查课程是否已被用户收藏
    pub async fn is_favorite_impl(&self, user_id: &str, course_id: i64) -> Result<bool> {
        let count = Favorites::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询收藏状态失败", e))?;

        Ok(count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::super::courses::tests::course;
    use super::super::memory_storage;
    use super::super::universities::tests::university;
    use crate::entity::prelude::Courses;
    use crate::errors::DiscoveryError;
    use crate::storage::Storage;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_add_check_remove_favorite() {
        let storage = memory_storage().await;
        let uni = storage.create_university(university("Durham")).await.unwrap();
        let c = storage
            .create_course(course(uni.id, "MA History", Some("Arts"), None, None))
            .await
            .unwrap();

        assert!(!storage.is_favorite("u-1", c.id).await.unwrap());

        let favorite = storage.add_to_favorites("u-1", c.id).await.unwrap();
        assert_eq!(favorite.user_id, "u-1");
        assert_eq!(favorite.course_id, c.id);
        assert!(storage.is_favorite("u-1", c.id).await.unwrap());
        assert!(!storage.is_favorite("u-2", c.id).await.unwrap());

        storage.remove_from_favorites("u-1", c.id).await.unwrap();
        assert!(!storage.is_favorite("u-1", c.id).await.unwrap());

        // 重复删除无副作用
        storage.remove_from_favorites("u-1", c.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_favorite_is_conflict() {
        let storage = memory_storage().await;
        let uni = storage.create_university(university("Exeter")).await.unwrap();
        let c = storage
            .create_course(course(uni.id, "BSc Geography", None, None, None))
            .await
            .unwrap();

        storage.add_to_favorites("u-1", c.id).await.unwrap();
        let err = storage.add_to_favorites("u-1", c.id).await.unwrap_err();
        assert!(matches!(err, DiscoveryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_favorites_include_course_and_skip_deleted() {
        let storage = memory_storage().await;
        let uni = storage.create_university(university("Warwick")).await.unwrap();
        let kept = storage
            .create_course(course(uni.id, "MBA", Some("Business"), None, None))
            .await
            .unwrap();
        let removed = storage
            .create_course(course(uni.id, "MSc Finance", Some("Business"), None, None))
            .await
            .unwrap();

        storage.add_to_favorites("u-1", kept.id).await.unwrap();
        storage.add_to_favorites("u-1", removed.id).await.unwrap();
        storage.add_to_favorites("u-2", kept.id).await.unwrap();

        let favorites = storage.get_user_favorites("u-1").await.unwrap();
        assert_eq!(favorites.len(), 2);
        assert!(favorites.iter().all(|f| f.course.university.as_ref() == Some(&uni)));

        Courses::delete_by_id(removed.id)
            .exec(&storage.db)
            .await
            .unwrap();

        let favorites = storage.get_user_favorites("u-1").await.unwrap();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].course.course, kept);
        assert_eq!(favorites[0].favorite.course_id, kept.id);

        assert!(storage.get_user_favorites("nobody").await.unwrap().is_empty());
    }
}
