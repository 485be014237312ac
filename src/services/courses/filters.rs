use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{CourseService, FilterKind};

pub async fn list_filter_options(
    service: &CourseService,
    kind: FilterKind,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let values = match kind {
        FilterKind::Faculties => storage.get_distinct_faculties().await?,
        FilterKind::Levels => storage.get_distinct_levels().await?,
        FilterKind::IeltsScores => storage.get_distinct_ielts_scores().await?,
    };

    Ok(HttpResponse::Ok().json(values))
}
