use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 新申请的默认状态
pub const DEFAULT_APPLICATION_STATUS: &str = "pending";

// 申请实体，status 为自由文本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/application.ts")]
pub struct Application {
    pub id: i64,
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub selected_courses: Vec<i64>,
    pub message: Option<String>,
    pub status: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 申请中所选课程的摘要
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/application.ts")]
pub struct CourseDetail {
    pub id: i64,
    pub name: String,
    pub university_name: Option<String>,
}
