use serde::Serialize;
use ts_rs::TS;

/// 未读通知数量响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/notification.ts")]
pub struct UnreadCountResponse {
    pub count: u64,
}
