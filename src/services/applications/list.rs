use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ApplicationService;

pub async fn list_applications(
    service: &ApplicationService,
    user_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let applications = storage.get_user_applications(user_id).await?;
    Ok(HttpResponse::Ok().json(applications))
}
