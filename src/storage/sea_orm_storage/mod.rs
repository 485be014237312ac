//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod applications;
mod counselors;
mod courses;
mod favorites;
mod notifications;
mod tutorials;
mod universities;
mod users;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{DiscoveryError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 使用全局配置创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(&config.database).await
    }

    /// 按给定数据库配置连接并运行迁移
    pub async fn connect(database: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, database).await?
        } else {
            Self::connect_generic(&db_url, database).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| DiscoveryError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, database: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| DiscoveryError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(database.pool_size.max(1))
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| DiscoveryError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, database: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(database.timeout))
            .acquire_timeout(Duration::from_secs(database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| DiscoveryError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    pub(crate) fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(DiscoveryError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        self.get_user_impl(id).await
    }

    async fn upsert_user(&self, user: UpsertUserRequest) -> Result<User> {
        self.upsert_user_impl(user).await
    }

    async fn get_users(&self) -> Result<Vec<User>> {
        self.get_users_impl().await
    }

    // 大学模块
    async fn get_universities(&self) -> Result<Vec<University>> {
        self.get_universities_impl().await
    }

    async fn create_university(&self, university: CreateUniversityRequest) -> Result<University> {
        self.create_university_impl(university).await
    }

    // 课程模块
    async fn get_courses(&self, filters: CourseFilters) -> Result<Vec<CourseWithUniversity>> {
        self.get_courses_impl(filters, None).await
    }

    async fn get_courses_paginated(
        &self,
        filters: CourseFilters,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<CourseWithUniversity>> {
        self.get_courses_impl(filters, Some((limit, offset))).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<CourseWithUniversity>> {
        self.get_course_by_id_impl(id).await
    }

    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_distinct_faculties(&self) -> Result<Vec<String>> {
        self.get_distinct_faculties_impl().await
    }

    async fn get_distinct_levels(&self) -> Result<Vec<String>> {
        self.get_distinct_levels_impl().await
    }

    async fn get_distinct_ielts_scores(&self) -> Result<Vec<String>> {
        self.get_distinct_ielts_scores_impl().await
    }

    // 顾问模块
    async fn get_counselors(&self) -> Result<Vec<Counselor>> {
        self.get_counselors_impl().await
    }

    async fn create_counselor(&self, counselor: CreateCounselorRequest) -> Result<Counselor> {
        self.create_counselor_impl(counselor).await
    }

    // 收藏模块
    async fn get_user_favorites(&self, user_id: &str) -> Result<Vec<FavoriteWithCourse>> {
        self.get_user_favorites_impl(user_id).await
    }

    async fn add_to_favorites(&self, user_id: &str, course_id: i64) -> Result<Favorite> {
        self.add_to_favorites_impl(user_id, course_id).await
    }

    async fn remove_from_favorites(&self, user_id: &str, course_id: i64) -> Result<()> {
        self.remove_from_favorites_impl(user_id, course_id).await
    }

    async fn is_favorite(&self, user_id: &str, course_id: i64) -> Result<bool> {
        self.is_favorite_impl(user_id, course_id).await
    }

    // 申请模块
    async fn create_application(
        &self,
        application: CreateApplicationRequest,
    ) -> Result<Application> {
        self.create_application_impl(application).await
    }

    async fn get_user_applications(&self, user_id: &str) -> Result<Vec<ApplicationWithCourses>> {
        self.get_user_applications_impl(user_id).await
    }

    async fn update_application_status(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<Application>> {
        self.update_application_status_impl(id, status).await
    }

    async fn get_all_applications(&self) -> Result<Vec<Application>> {
        self.get_all_applications_impl().await
    }

    // 通知模块
    async fn get_user_notifications(&self, user_id: &str) -> Result<Vec<Notification>> {
        self.get_user_notifications_impl(user_id).await
    }

    async fn create_notification(
        &self,
        notification: CreateNotificationRequest,
    ) -> Result<Notification> {
        self.create_notification_impl(notification).await
    }

    async fn mark_notification_as_read(&self, id: i64) -> Result<()> {
        self.mark_notification_as_read_impl(id).await
    }

    async fn get_unread_notification_count(&self, user_id: &str) -> Result<u64> {
        self.get_unread_notification_count_impl(user_id).await
    }

    // 教程模块
    async fn get_tutorials(&self) -> Result<Vec<Tutorial>> {
        self.get_tutorials_impl().await
    }

    async fn create_tutorial(&self, tutorial: CreateTutorialRequest) -> Result<Tutorial> {
        self.create_tutorial_impl(tutorial).await
    }
}

/// 测试用的内存 SQLite 存储
#[cfg(test)]
pub(crate) async fn memory_storage() -> SeaOrmStorage {
    SeaOrmStorage::connect(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    })
    .await
    .expect("Failed to create in-memory storage")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("data/app.db").unwrap(),
            "sqlite://data/app.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("postgres://u:p@localhost/db").unwrap(),
            "postgres://u:p@localhost/db"
        );
        assert!(SeaOrmStorage::build_database_url("redis://localhost").is_err());
    }

    #[tokio::test]
    async fn test_memory_storage_runs_migrations() {
        let storage = memory_storage().await;
        assert!(storage.get_universities().await.unwrap().is_empty());
        assert!(storage.get_users().await.unwrap().is_empty());
    }
}
