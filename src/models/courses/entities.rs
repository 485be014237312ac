use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::universities::entities::University;

// 课程实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub university_id: i64,
    pub name: String,
    pub faculty: Option<String>,
    pub level: Option<String>,
    pub duration: Option<String>,
    pub tuition_fee: Option<String>,
    pub ielts_overall: Option<String>,
    pub intake: Option<String>,
    pub description: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 课程及其所属大学
//
// 所属大学行缺失时 university 为 null
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/course.ts")]
pub struct CourseWithUniversity {
    #[serde(flatten)]
    #[ts(flatten)]
    pub course: Course,
    pub university: Option<University>,
}
