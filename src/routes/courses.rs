use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::courses::requests::{CourseListParams, CreateCourseRequest};
use crate::services::CourseService;
use crate::services::courses::FilterKind;
use crate::utils::SafeIDI64;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(query.into_inner(), &req).await
}

pub async fn get_course(req: HttpRequest, course_id: SafeIDI64) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.0, &req).await
}

pub async fn create_course(
    req: HttpRequest,
    course: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(course.into_inner(), &req).await
}

pub async fn list_faculties(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .list_filter_options(FilterKind::Faculties, &req)
        .await
}

pub async fn list_levels(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .list_filter_options(FilterKind::Levels, &req)
        .await
}

pub async fn list_ielts_scores(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .list_filter_options(FilterKind::IeltsScores, &req)
        .await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_course)),
    )
    .service(
        web::scope("/api/filters")
            .route("/faculties", web::get().to(list_faculties))
            .route("/levels", web::get().to(list_levels))
            .route("/ielts-scores", web::get().to(list_ielts_scores)),
    );
}
