use serde::Deserialize;
use ts_rs::TS;

// 添加收藏请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/favorite.ts")]
pub struct AddFavoriteRequest {
    pub course_id: i64,
}
