use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教程实体，按 (category_order, sort_order) 展示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/tutorial.ts")]
pub struct Tutorial {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub category: String,
    pub category_order: i32,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
