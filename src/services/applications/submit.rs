use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ApplicationService;
use crate::models::applications::requests::{CreateApplicationRequest, SubmitApplicationRequest};
use crate::services::require_text;

pub async fn submit_application(
    service: &ApplicationService,
    user_id: &str,
    submission: SubmitApplicationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    require_text("fullName", &submission.full_name)?;
    require_text("email", &submission.email)?;

    let storage = service.get_storage(request)?;

    let application = storage
        .create_application(CreateApplicationRequest::from_submission(user_id, submission))
        .await?;
    info!(
        "Application {} submitted by {} with {} course(s)",
        application.id,
        user_id,
        application.selected_courses.len()
    );

    Ok(HttpResponse::Created().json(application))
}
