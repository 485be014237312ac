use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::tutorials::requests::CreateTutorialRequest;
use crate::storage::Storage;

pub struct TutorialService {
    storage: Option<Arc<dyn Storage>>,
}

impl TutorialService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 获取教程列表
    pub async fn list_tutorials(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let storage = self.get_storage(request)?;
        let tutorials = storage.get_tutorials().await?;
        Ok(HttpResponse::Ok().json(tutorials))
    }

    // 创建教程
    pub async fn create_tutorial(
        &self,
        tutorial: CreateTutorialRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        super::require_text("title", &tutorial.title)?;
        super::require_text("category", &tutorial.category)?;

        let storage = self.get_storage(request)?;
        let created = storage.create_tutorial(tutorial).await?;
        Ok(HttpResponse::Created().json(created))
    }
}
