use serde::Deserialize;
use ts_rs::TS;

/// 表示“不筛选”的前端占位值
pub const ALL_FACULTIES: &str = "All Faculties";
pub const ALL_LEVELS: &str = "All Levels";
pub const ALL_IELTS_SCORES: &str = "All IELTS Scores";

/// 单页最大条数
pub const MAX_PAGE_SIZE: u64 = 100;

/// 数据库可接受的最大 LIMIT/OFFSET（SQL 整数为有符号 64 位）
pub const MAX_ROW_OFFSET: u64 = i64::MAX as u64;

/// 课程筛选条件（用于存储层）
///
/// 各条件之间为 AND 关系；空字符串与占位值均视为未设置。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseFilters {
    pub search: Option<String>,
    pub faculty: Option<String>,
    pub level: Option<String>,
    pub ielts_score: Option<String>,
}

/// IELTS 筛选条件
#[derive(Debug, Clone, PartialEq)]
pub enum IeltsFilter {
    /// 按规范化后的分数精确匹配
    Score(String),
    /// 无法解析为数字，任何课程都不匹配
    Unmatchable,
}

fn active_value<'a>(value: &'a Option<String>, sentinel: &str) -> Option<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != sentinel)
}

impl CourseFilters {
    /// 搜索词按原样参与匹配（保留首尾空格），仅空字符串视为未设置
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|v| !v.is_empty())
    }

    pub fn faculty_filter(&self) -> Option<&str> {
        active_value(&self.faculty, ALL_FACULTIES)
    }

    pub fn level_filter(&self) -> Option<&str> {
        active_value(&self.level, ALL_LEVELS)
    }

    pub fn ielts_filter(&self) -> Option<IeltsFilter> {
        active_value(&self.ielts_score, ALL_IELTS_SCORES).map(|raw| {
            normalize_ielts_score(raw)
                .map(IeltsFilter::Score)
                .unwrap_or(IeltsFilter::Unmatchable)
        })
    }
}

/// 将 IELTS 分数规范化为统一的文本形式（"7.0" -> "7"，"6.50" -> "6.5"）
pub fn normalize_ielts_score(raw: &str) -> Option<String> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|score| score.is_finite())
        .map(|score| score.to_string())
}

// 课程列表查询参数（来自HTTP请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/course.ts")]
pub struct CourseListParams {
    pub search: Option<String>,
    pub faculty: Option<String>,
    pub level: Option<String>,
    pub ielts_score: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl CourseListParams {
    pub fn filters(&self) -> CourseFilters {
        CourseFilters {
            search: self.search.clone(),
            faculty: self.faculty.clone(),
            level: self.level.clone(),
            ielts_score: self.ielts_score.clone(),
        }
    }

    /// 提供了 limit 时返回 (limit, offset)
    pub fn page(&self) -> Option<(u64, u64)> {
        self.limit.map(|limit| {
            (
                limit.clamp(1, MAX_PAGE_SIZE),
                self.offset.unwrap_or(0).min(MAX_ROW_OFFSET),
            )
        })
    }
}

// 课程创建请求
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../client/src/types/generated/course.ts")]
pub struct CreateCourseRequest {
    pub university_id: i64,
    pub name: String,
    pub faculty: Option<String>,
    pub level: Option<String>,
    pub duration: Option<String>,
    pub tuition_fee: Option<String>,
    pub ielts_overall: Option<String>,
    pub intake: Option<String>,
    pub description: Option<String>,
}
