use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 未指定类型时使用的通知类型
pub const DEFAULT_NOTIFICATION_TYPE: &str = "info";

// 通知实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
