use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::universities::requests::CreateUniversityRequest;
use crate::storage::Storage;

pub struct UniversityService {
    storage: Option<Arc<dyn Storage>>,
}

impl UniversityService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 获取大学列表
    pub async fn list_universities(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        let universities = storage.get_universities().await?;
        Ok(HttpResponse::Ok().json(universities))
    }

    // 创建大学
    pub async fn create_university(
        &self,
        university: CreateUniversityRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        super::require_text("name", &university.name)?;

        let storage = self.get_storage(request)?;
        let created = storage.create_university(university).await?;
        Ok(HttpResponse::Created().json(created))
    }
}
