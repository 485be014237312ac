//! 申请存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::applications::{
    ActiveModel, Column, Entity as Applications, encode_selected_courses,
};
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::universities::Entity as Universities;
use crate::errors::{DiscoveryError, Result};
use crate::models::applications::{
    entities::{Application, CourseDetail, DEFAULT_APPLICATION_STATUS},
    requests::CreateApplicationRequest,
    responses::ApplicationWithCourses,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建申请，未指定状态时为 pending
    pub async fn create_application_impl(
        &self,
        req: CreateApplicationRequest,
    ) -> Result<Application> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(req.user_id),
            full_name: Set(req.full_name),
            email: Set(req.email),
            phone: Set(req.phone),
            nationality: Set(req.nationality),
            selected_courses: Set(encode_selected_courses(&req.selected_courses)),
            message: Set(req.message),
            status: Set(req
                .status
                .unwrap_or_else(|| DEFAULT_APPLICATION_STATUS.to_string())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("创建申请失败", e))?;

        Ok(result.into_application())
    }

    /// 列出用户申请（最新优先），附带所选课程摘要
    pub async fn get_user_applications_impl(
        &self,
        user_id: &str,
    ) -> Result<Vec<ApplicationWithCourses>> {
        let applications: Vec<Application> = Applications::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询申请列表失败", e))?
            .into_iter()
            .map(|m| m.into_application())
            .collect();

        let details = self.load_course_details(&applications).await?;

        Ok(applications
            .into_iter()
            .map(|application| {
                // 按选择顺序输出，重复的课程只保留一次
                let mut seen = HashSet::new();
                let course_details = application
                    .selected_courses
                    .iter()
                    .filter(|id| seen.insert(**id))
                    .filter_map(|id| details.get(id).cloned())
                    .collect();
                ApplicationWithCourses {
                    application,
                    course_details,
                }
            })
            .collect())
    }

    /// 一次查询加载所有申请涉及的课程摘要
    async fn load_course_details(
        &self,
        applications: &[Application],
    ) -> Result<HashMap<i64, CourseDetail>> {
        let mut course_ids: Vec<i64> = applications
            .iter()
            .flat_map(|a| a.selected_courses.iter().copied())
            .collect();
        course_ids.sort_unstable();
        course_ids.dedup();

        if course_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Courses::find()
            .filter(CourseColumn::Id.is_in(course_ids))
            .find_also_related(Universities)
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询申请课程失败", e))?;

        Ok(rows
            .into_iter()
            .map(|(course, university)| {
                (
                    course.id,
                    CourseDetail {
                        id: course.id,
                        name: course.name,
                        university_name: university.map(|u| u.name),
                    },
                )
            })
            .collect())
    }

    /// 更新申请状态，申请不存在时返回 None
    pub async fn update_application_status_impl(
        &self,
        id: i64,
        status: &str,
    ) -> Result<Option<Application>> {
        let Some(existing) = Applications::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询申请失败", e))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.status = Set(status.to_string());
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("更新申请状态失败", e))?;

        Ok(Some(updated.into_application()))
    }

    /// 列出全部申请（最新优先）
    pub async fn get_all_applications_impl(&self) -> Result<Vec<Application>> {
        let applications = Applications::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询申请列表失败", e))?;

        Ok(applications
            .into_iter()
            .map(|m| m.into_application())
            .collect())
    }
}
