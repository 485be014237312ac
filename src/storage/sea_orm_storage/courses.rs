//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::universities::Entity as Universities;
use crate::errors::{DiscoveryError, Result};
use crate::models::courses::{
    entities::{Course, CourseWithUniversity},
    requests::{
        CourseFilters, CreateCourseRequest, IeltsFilter, MAX_ROW_OFFSET, normalize_ielts_score,
    },
};
use crate::utils::{LIKE_ESCAPE, escape_like_pattern};
use sea_orm::sea_query::{Expr, ExprTrait, Func, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    Set, SqlErr,
};

/// 将筛选条件转换为谓词列表（AND 连接）
///
/// 返回 `None` 表示条件不可能被满足。
fn course_condition(filters: &CourseFilters) -> Option<Condition> {
    let mut condition = Condition::all();

    // 名称模糊搜索（不区分大小写）
    if let Some(term) = filters.search_term() {
        let pattern = format!("%{}%", escape_like_pattern(&term.to_lowercase()));
        condition = condition.add(
            Expr::expr(Func::lower(Expr::col((Courses, Column::Name))))
                .like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
        );
    }

    // 学院筛选
    if let Some(faculty) = filters.faculty_filter() {
        condition = condition.add(Column::Faculty.eq(faculty));
    }

    // 学历层次筛选
    if let Some(level) = filters.level_filter() {
        condition = condition.add(Column::Level.eq(level));
    }

    // 雅思分数筛选
    match filters.ielts_filter() {
        Some(IeltsFilter::Score(score)) => {
            condition = condition.add(Column::IeltsOverall.eq(score));
        }
        Some(IeltsFilter::Unmatchable) => return None,
        None => {}
    }

    Some(condition)
}

impl SeaOrmStorage {
    /// 按条件列出课程（可选分页）
    ///
    /// 结果按课程 ID 升序，保证分页之间不重叠。limit/offset 超出 SQL 整数范围时截断。
    pub async fn get_courses_impl(
        &self,
        filters: CourseFilters,
        page: Option<(u64, u64)>,
    ) -> Result<Vec<CourseWithUniversity>> {
        let Some(condition) = course_condition(&filters) else {
            return Ok(Vec::new());
        };

        let mut select = Courses::find()
            .find_also_related(Universities)
            .filter(condition)
            .order_by_asc(Column::Id);

        if let Some((limit, offset)) = page {
            select = select
                .limit(Ord::min(limit, MAX_ROW_OFFSET))
                .offset(Ord::min(offset, MAX_ROW_OFFSET));
        }

        let rows = select
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询课程列表失败", e))?;

        Ok(rows
            .into_iter()
            .map(|(course, university)| course.with_university(university))
            .collect())
    }

    /// 通过 ID 获取课程（含所属大学）
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<CourseWithUniversity>> {
        let row = Courses::find_by_id(id)
            .find_also_related(Universities)
            .one(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db("查询课程失败", e))?;

        Ok(row.map(|(course, university)| course.with_university(university)))
    }

    /// 创建课程，所属大学不存在时返回校验错误
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let university_id = req.university_id;
        let now = chrono::Utc::now().timestamp();

        // 与筛选使用同一规范化形式，无法解析时保留原文
        let ielts_overall = req
            .ielts_overall
            .map(|raw| normalize_ielts_score(&raw).unwrap_or(raw));

        let model = ActiveModel {
            university_id: Set(req.university_id),
            name: Set(req.name),
            faculty: Set(req.faculty),
            level: Set(req.level),
            duration: Set(req.duration),
            tuition_fee: Set(req.tuition_fee),
            ielts_overall: Set(ielts_overall),
            intake: Set(req.intake),
            description: Set(req.description),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                    DiscoveryError::validation(format!("University {university_id} does not exist"))
                }
                _ => DiscoveryError::from_db("创建课程失败", e),
            })?;

        Ok(result.into_course())
    }

    /// 查询某一列去重后的非空取值（升序）
    async fn distinct_course_values(&self, column: Column, context: &str) -> Result<Vec<String>> {
        let values: Vec<Option<String>> = Courses::find()
            .select_only()
            .column(column)
            .distinct()
            .order_by_asc(column)
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| DiscoveryError::from_db(context, e))?;

        Ok(values
            .into_iter()
            .flatten()
            .filter(|v| !v.trim().is_empty())
            .collect())
    }

    pub async fn get_distinct_faculties_impl(&self) -> Result<Vec<String>> {
        self.distinct_course_values(Column::Faculty, "查询学院列表失败")
            .await
    }

    pub async fn get_distinct_levels_impl(&self) -> Result<Vec<String>> {
        self.distinct_course_values(Column::Level, "查询学历层次失败")
            .await
    }

    pub async fn get_distinct_ielts_scores_impl(&self) -> Result<Vec<String>> {
        self.distinct_course_values(Column::IeltsOverall, "查询雅思分数失败")
            .await
    }
}
