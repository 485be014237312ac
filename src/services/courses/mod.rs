pub mod create;
pub mod filters;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::courses::requests::{CourseListParams, CreateCourseRequest};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

/// 可选的筛选维度
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Faculties,
    Levels,
    IeltsScores,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        super::resolve_storage(&self.storage, request)
    }

    // 获取课程列表（可选分页）
    pub async fn list_courses(
        &self,
        query: CourseListParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, query, request).await
    }

    // 根据ID获取课程
    pub async fn get_course(&self, course_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::get_course(self, course_id, request).await
    }

    // 创建课程
    pub async fn create_course(
        &self,
        course: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, course, request).await
    }

    // 获取筛选项
    pub async fn list_filter_options(
        &self,
        kind: FilterKind,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        filters::list_filter_options(self, kind, request).await
    }
}
