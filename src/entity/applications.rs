//! 申请实体
//!
//! `selected_courses` 以 JSON 数组文本存储，兼容 SQLite/MySQL/PostgreSQL。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "applications")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub selected_courses: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub message: Option<String>,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// 编码所选课程列表
pub fn encode_selected_courses(ids: &[i64]) -> String {
    serde_json::to_string(ids).unwrap_or_else(|_| "[]".to_string())
}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_application(self) -> crate::models::applications::entities::Application {
        use crate::models::applications::entities::Application;
        use chrono::{DateTime, Utc};

        Application {
            id: self.id,
            user_id: self.user_id,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            nationality: self.nationality,
            selected_courses: serde_json::from_str(&self.selected_courses).unwrap_or_default(),
            message: self.message,
            status: self.status,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
