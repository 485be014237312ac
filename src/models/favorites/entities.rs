use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::courses::entities::CourseWithUniversity;

// 收藏实体，(user_id, course_id) 唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/favorite.ts")]
pub struct Favorite {
    pub id: i64,
    pub user_id: String,
    pub course_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 收藏及其课程详情
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/favorite.ts")]
pub struct FavoriteWithCourse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub favorite: Favorite,
    pub course: CourseWithUniversity,
}
