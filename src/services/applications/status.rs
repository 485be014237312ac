use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ApplicationService;
use crate::errors::DiscoveryError;
use crate::models::applications::requests::UpdateApplicationStatusRequest;

pub async fn update_status(
    service: &ApplicationService,
    application_id: i64,
    update: UpdateApplicationStatusRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    crate::services::require_text("status", &update.status)?;

    let storage = service.get_storage(request)?;

    match storage
        .update_application_status(application_id, update.status.trim())
        .await?
    {
        Some(application) => Ok(HttpResponse::Ok().json(application)),
        None => Err(DiscoveryError::not_found("Application not found").into()),
    }
}
