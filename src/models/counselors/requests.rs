use serde::Deserialize;
use ts_rs::TS;

// 顾问创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/counselor.ts")]
pub struct CreateCounselorRequest {
    pub name: String,
    pub title: Option<String>,
    pub specialization: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}
