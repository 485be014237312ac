use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::CurrentUser;
use crate::models::notifications::requests::CreateNotificationRequest;
use crate::services::NotificationService;
use crate::utils::SafeIDI64;

static NOTIFICATION_SERVICE: Lazy<NotificationService> = Lazy::new(NotificationService::new_lazy);

pub async fn list_notifications(req: HttpRequest, user: CurrentUser) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.list_notifications(user.id(), &req).await
}

pub async fn create_notification(
    req: HttpRequest,
    notification: web::Json<CreateNotificationRequest>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .create_notification(notification.into_inner(), &req)
        .await
}

pub async fn unread_count(req: HttpRequest, user: CurrentUser) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.unread_count(user.id(), &req).await
}

pub async fn mark_as_read(req: HttpRequest, notification_id: SafeIDI64) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE.mark_as_read(notification_id.0, &req).await
}

pub fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/notifications")
            .route("", web::get().to(list_notifications))
            .route("", web::post().to(create_notification))
            .route("/unread-count", web::get().to(unread_count))
            .route("/{id}/read", web::patch().to(mark_as_read)),
    );
}
