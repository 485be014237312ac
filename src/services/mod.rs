pub mod admin;
pub mod applications;
pub mod counselors;
pub mod courses;
pub mod favorites;
pub mod notifications;
pub mod tutorials;
pub mod universities;
pub mod users;

pub use admin::AdminService;
pub use applications::ApplicationService;
pub use counselors::CounselorService;
pub use courses::CourseService;
pub use favorites::FavoriteService;
pub use notifications::NotificationService;
pub use tutorials::TutorialService;
pub use universities::UniversityService;
pub use users::UserService;

use actix_web::{HttpRequest, web};
use std::sync::Arc;

use crate::errors::{DiscoveryError, Result};
use crate::storage::Storage;

/// 取出服务使用的存储实例
///
/// 服务未预置存储时，从请求的 app data 中读取。
pub(crate) fn resolve_storage(
    preset: &Option<Arc<dyn Storage>>,
    request: &HttpRequest,
) -> Result<Arc<dyn Storage>> {
    if let Some(storage) = preset {
        return Ok(storage.clone());
    }

    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| DiscoveryError::database_config("Storage not found in app data"))
}

/// 校验必填文本字段
pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(DiscoveryError::validation(format!("{field} is required")));
    }
    Ok(())
}
