use serde::Deserialize;
use ts_rs::TS;

// 通知创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/notification.ts")]
pub struct CreateNotificationRequest {
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub notification_type: Option<String>,
}
