use serde::Deserialize;
use ts_rs::TS;

// 用户资料请求（来自HTTP请求，id 取自请求身份）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/user.ts")]
pub struct UserProfileRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

// 用户写入请求（用于存储层）
#[derive(Debug, Clone)]
pub struct UpsertUserRequest {
    pub id: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub profile_image_url: Option<String>,
}

impl UpsertUserRequest {
    pub fn from_profile(id: impl Into<String>, profile: UserProfileRequest) -> Self {
        Self {
            id: id.into(),
            email: profile.email,
            first_name: profile.first_name,
            last_name: profile.last_name,
            profile_image_url: profile.profile_image_url,
        }
    }
}
