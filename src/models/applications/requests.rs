use serde::Deserialize;
use ts_rs::TS;

// 申请提交请求（来自HTTP请求，user_id 取自请求身份）
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/application.ts")]
pub struct SubmitApplicationRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    #[serde(default)]
    pub selected_courses: Vec<i64>,
    pub message: Option<String>,
}

// 申请创建请求（用于存储层）
#[derive(Debug, Clone)]
pub struct CreateApplicationRequest {
    pub user_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub nationality: Option<String>,
    pub selected_courses: Vec<i64>,
    pub message: Option<String>,
    pub status: Option<String>,
}

impl CreateApplicationRequest {
    pub fn from_submission(user_id: impl Into<String>, req: SubmitApplicationRequest) -> Self {
        Self {
            user_id: user_id.into(),
            full_name: req.full_name,
            email: req.email,
            phone: req.phone,
            nationality: req.nationality,
            selected_courses: req.selected_courses,
            message: req.message,
            status: None,
        }
    }
}

// 申请状态更新请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../client/src/types/generated/application.ts")]
pub struct UpdateApplicationStatusRequest {
    pub status: String,
}
