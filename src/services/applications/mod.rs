pub mod list;
pub mod status;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::applications::requests::{
    SubmitApplicationRequest, UpdateApplicationStatusRequest,
};
use crate::storage::Storage;

pub struct ApplicationService {
    storage: Option<Arc<dyn Storage>>,
}

impl ApplicationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 获取用户申请
    pub async fn list_applications(
        &self,
        user_id: &str,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_applications(self, user_id, request).await
    }

    // 提交申请
    pub async fn submit_application(
        &self,
        user_id: &str,
        submission: SubmitApplicationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_application(self, user_id, submission, request).await
    }

    // 更新申请状态
    pub async fn update_status(
        &self,
        application_id: i64,
        update: UpdateApplicationStatusRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        status::update_status(self, application_id, update, request).await
    }
}
