use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::counselors::requests::CreateCounselorRequest;
use crate::storage::Storage;

pub struct CounselorService {
    storage: Option<Arc<dyn Storage>>,
}

impl CounselorService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 获取在职顾问列表
    pub async fn list_counselors(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        let counselors = storage.get_counselors().await?;
        Ok(HttpResponse::Ok().json(counselors))
    }

    // 创建顾问
    pub async fn create_counselor(
        &self,
        counselor: CreateCounselorRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        super::require_text("name", &counselor.name)?;

        let storage = self.get_storage(request)?;
        let created = storage.create_counselor(counselor).await?;
        Ok(HttpResponse::Created().json(created))
    }
}
