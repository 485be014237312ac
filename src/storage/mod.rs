use std::sync::Arc;

use crate::models::{
    applications::{
        entities::Application, requests::CreateApplicationRequest,
        responses::ApplicationWithCourses,
    },
    counselors::{entities::Counselor, requests::CreateCounselorRequest},
    courses::{
        entities::{Course, CourseWithUniversity},
        requests::{CourseFilters, CreateCourseRequest},
    },
    favorites::entities::{Favorite, FavoriteWithCourse},
    notifications::{entities::Notification, requests::CreateNotificationRequest},
    tutorials::{entities::Tutorial, requests::CreateTutorialRequest},
    universities::{entities::University, requests::CreateUniversityRequest},
    users::{entities::User, requests::UpsertUserRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 通过ID获取用户信息
    async fn get_user(&self, id: &str) -> Result<Option<User>>;
    // 写入用户，id 冲突时更新资料字段
    async fn upsert_user(&self, user: UpsertUserRequest) -> Result<User>;
    // 列出全部用户（最新优先）
    async fn get_users(&self) -> Result<Vec<User>>;

    /// 大学管理方法
    async fn get_universities(&self) -> Result<Vec<University>>;
    async fn create_university(&self, university: CreateUniversityRequest) -> Result<University>;

    /// 课程管理方法
    // 按条件列出课程（含所属大学）
    async fn get_courses(&self, filters: CourseFilters) -> Result<Vec<CourseWithUniversity>>;
    // 按条件分页列出课程
    async fn get_courses_paginated(
        &self,
        filters: CourseFilters,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<CourseWithUniversity>>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Option<CourseWithUniversity>>;
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 筛选项
    async fn get_distinct_faculties(&self) -> Result<Vec<String>>;
    async fn get_distinct_levels(&self) -> Result<Vec<String>>;
    async fn get_distinct_ielts_scores(&self) -> Result<Vec<String>>;

    /// 顾问管理方法
    // 仅返回在职顾问
    async fn get_counselors(&self) -> Result<Vec<Counselor>>;
    async fn create_counselor(&self, counselor: CreateCounselorRequest) -> Result<Counselor>;

    /// 收藏管理方法
    async fn get_user_favorites(&self, user_id: &str) -> Result<Vec<FavoriteWithCourse>>;
    async fn add_to_favorites(&self, user_id: &str, course_id: i64) -> Result<Favorite>;
    async fn remove_from_favorites(&self, user_id: &str, course_id: i64) -> Result<()>;
    async fn is_favorite(&self, user_id: &str, course_id: i64) -> Result<bool>;

    /// 申请管理方法
    async fn create_application(&self, application: CreateApplicationRequest)
    -> Result<Application>;
    // 列出用户申请（含所选课程详情，最新优先）
    async fn get_user_applications(&self, user_id: &str) -> Result<Vec<ApplicationWithCourses>>;
    // 更新申请状态，不校验状态取值
    async fn update_application_status(&self, id: i64, status: &str)
    -> Result<Option<Application>>;
    // 列出全部申请（最新优先）
    async fn get_all_applications(&self) -> Result<Vec<Application>>;

    /// 通知管理方法
    async fn get_user_notifications(&self, user_id: &str) -> Result<Vec<Notification>>;
    async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification>;
    async fn mark_notification_as_read(&self, id: i64) -> Result<()>;
    async fn get_unread_notification_count(&self, user_id: &str) -> Result<u64>;

    /// 教程管理方法
    // 仅返回启用的教程，按分类顺序和展示顺序排序
    async fn get_tutorials(&self) -> Result<Vec<Tutorial>>;
    async fn create_tutorial(&self, tutorial: CreateTutorialRequest) -> Result<Tutorial>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
