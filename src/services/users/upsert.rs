use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::UserService;
use crate::models::users::requests::{UpsertUserRequest, UserProfileRequest};

pub async fn upsert_current_user(
    service: &UserService,
    user_id: &str,
    profile: UserProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    let user = storage
        .upsert_user(UpsertUserRequest::from_profile(user_id, profile))
        .await?;
    debug!("Upserted user {}", user.id);

    Ok(HttpResponse::Ok().json(user))
}
