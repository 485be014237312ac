//! 管理端列表
//!
//! 不做任何权限校验。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::storage::Storage;

pub struct AdminService {
    storage: Option<Arc<dyn Storage>>,
}

impl AdminService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 全部用户（最新优先）
    pub async fn list_users(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        let users = storage.get_users().await?;
        Ok(HttpResponse::Ok().json(users))
    }

    // 全部申请（最新优先）
    pub async fn list_applications(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        let applications = storage.get_all_applications().await?;
        Ok(HttpResponse::Ok().json(applications))
    }
}
