use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::errors::DiscoveryError;

pub async fn get_current_user(
    service: &UserService,
    user_id: &str,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.get_user(user_id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(DiscoveryError::not_found("User not found").into()),
    }
}
