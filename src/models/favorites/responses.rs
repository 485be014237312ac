use serde::Serialize;
use ts_rs::TS;

// 收藏状态响应
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/favorite.ts")]
pub struct FavoriteStatusResponse {
    pub is_favorite: bool,
}
