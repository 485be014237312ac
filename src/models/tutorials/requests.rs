use serde::Deserialize;
use ts_rs::TS;

// 教程创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/tutorial.ts")]
pub struct CreateTutorialRequest {
    pub title: String,
    pub description: Option<String>,
    pub video_url: Option<String>,
    pub category: String,
    #[serde(default)]
    pub category_order: i32,
    #[serde(default)]
    pub sort_order: i32,
    pub is_active: Option<bool>,
}
