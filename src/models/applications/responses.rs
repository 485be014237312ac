use serde::Serialize;
use ts_rs::TS;

use super::entities::{Application, CourseDetail};

// 申请及其所选课程详情
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/application.ts")]
pub struct ApplicationWithCourses {
    #[serde(flatten)]
    #[ts(flatten)]
    pub application: Application,
    pub course_details: Vec<CourseDetail>,
}
