use serde::Deserialize;
use ts_rs::TS;

// 大学创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/university.ts")]
pub struct CreateUniversityRequest {
    pub name: String,
    pub country: Option<String>,
    pub location: Option<String>,
    pub ranking: Option<i32>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}
