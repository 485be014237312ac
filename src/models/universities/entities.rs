use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 大学实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/university.ts")]
pub struct University {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
    pub location: Option<String>,
    pub ranking: Option<i32>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
