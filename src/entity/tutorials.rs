//! 教程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tutorials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub category: String,
    pub category_order: i32,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_tutorial(self) -> crate::models::tutorials::entities::Tutorial {
        use crate::models::tutorials::entities::Tutorial;
        use chrono::{DateTime, Utc};

        Tutorial {
            id: self.id,
            title: self.title,
            description: self.description,
            video_url: self.video_url,
            category: self.category,
            category_order: self.category_order,
            sort_order: self.sort_order,
            is_active: self.is_active,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
