/*!
 * 访问日志中间件
 *
 * 对 `/api` 前缀的请求在完成时输出一行日志：
 *
 * ```text
 * GET /api/courses 200 in 12ms :: [{"id":1,...}]
 * ```
 *
 * 仅在响应为非空 JSON 时附加 `:: <body>`，整行最多 80 个字符（超出部分以 `…` 结尾）。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    body::{BoxBody, MessageBody, to_bytes},
    dev::{ServiceRequest, ServiceResponse},
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::{info, warn};

const API_PREFIX: &str = "/api";
const MAX_LINE_CHARS: usize = 80;

/// 生成一行访问日志
pub fn format_access_line(
    method: &str,
    path: &str,
    status: u16,
    duration_ms: u128,
    body: Option<&str>,
) -> String {
    let mut line = format!("{method} {path} {status} in {duration_ms}ms");
    if let Some(body) = body.filter(|b| !b.is_empty()) {
        line.push_str(" :: ");
        line.push_str(body);
    }

    if line.chars().count() > MAX_LINE_CHARS {
        let mut truncated: String = line.chars().take(MAX_LINE_CHARS - 1).collect();
        truncated.push('…');
        truncated
    } else {
        line
    }
}

#[derive(Clone)]
pub struct AccessLog;

impl<S, B> Transform<S, ServiceRequest> for AccessLog
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AccessLogMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AccessLogMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AccessLogMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AccessLogMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let path = req.path().to_string();
        let method = req.method().to_string();
        let start = Instant::now();

        Box::pin(async move {
            let res = match srv.call(req).await {
                Ok(res) => res,
                Err(err) => {
                    if path.starts_with(API_PREFIX) {
                        let status = err.as_response_error().status_code().as_u16();
                        let line = format_access_line(
                            &method,
                            &path,
                            status,
                            start.elapsed().as_millis(),
                            None,
                        );
                        warn!("{}", line);
                    }
                    return Err(err);
                }
            };

            if !path.starts_with(API_PREFIX) {
                return Ok(res.map_into_boxed_body());
            }

            let status = res.status().as_u16();
            let is_json = res
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.starts_with("application/json"));

            if !is_json {
                let line = format_access_line(
                    &method,
                    &path,
                    status,
                    start.elapsed().as_millis(),
                    None,
                );
                info!("{}", line);
                return Ok(res.map_into_boxed_body());
            }

            // 读出响应体用于日志，再原样放回
            let (req, res) = res.into_parts();
            let (res, body) = res.into_parts();
            let bytes = to_bytes(body).await.map_err(|e| {
                let err: Box<dyn std::error::Error> = e.into();
                actix_web::error::ErrorInternalServerError(err.to_string())
            })?;

            let line = format_access_line(
                &method,
                &path,
                status,
                start.elapsed().as_millis(),
                std::str::from_utf8(&bytes).ok(),
            );
            info!("{}", line);

            let res = res.set_body(bytes).map_into_boxed_body();
            Ok(ServiceResponse::new(req, res))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test as atest;
    use actix_web::{App, HttpResponse, web};

    #[test]
    fn test_line_without_body() {
        assert_eq!(
            format_access_line("GET", "/api/courses", 200, 5, None),
            "GET /api/courses 200 in 5ms"
        );
        assert_eq!(
            format_access_line("DELETE", "/api/favorites/3", 204, 1, Some("")),
            "DELETE /api/favorites/3 204 in 1ms"
        );
    }

    #[test]
    fn test_line_with_body() {
        assert_eq!(
            format_access_line("GET", "/api/notifications/unread-count", 200, 3, Some(r#"{"count":2}"#)),
            r#"GET /api/notifications/unread-count 200 in 3ms :: {"count":2}"#
        );
    }

    #[test]
    fn test_long_line_is_truncated() {
        let body = format!("[{}]", "\"Economics\",".repeat(20));
        let line = format_access_line("GET", "/api/filters/faculties", 200, 2, Some(&body));
        assert_eq!(line.chars().count(), MAX_LINE_CHARS);
        assert!(line.ends_with('…'));
        assert!(line.starts_with("GET /api/filters/faculties 200 in 2ms :: [\"Economics\""));
    }

    #[actix_web::test]
    async fn test_json_body_is_preserved() {
        let app = atest::init_service(
            App::new()
                .wrap(AccessLog)
                .route(
                    "/api/ping",
                    web::get().to(|| async {
                        HttpResponse::Ok().json(serde_json::json!({ "pong": true }))
                    }),
                )
                .route("/health", web::get().to(|| async { "ok" })),
        )
        .await;

        let req = atest::TestRequest::get().uri("/api/ping").to_request();
        let body: serde_json::Value = atest::call_and_read_body_json(&app, req).await;
        assert_eq!(body["pong"], true);

        let req = atest::TestRequest::get().uri("/health").to_request();
        let body = atest::call_and_read_body(&app, req).await;
        assert_eq!(body, "ok");
    }

    async fn reject(
        _req: ServiceRequest,
        _next: actix_web::middleware::Next<BoxBody>,
    ) -> Result<ServiceResponse<BoxBody>, Error> {
        Err(actix_web::error::ErrorForbidden("origin rejected"))
    }

    #[actix_web::test]
    async fn test_inner_error_is_propagated() {
        let app = atest::init_service(
            App::new()
                .wrap(actix_web::middleware::from_fn(reject))
                .wrap(AccessLog)
                .route("/api/ping", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = atest::TestRequest::get().uri("/api/ping").to_request();
        let err = atest::try_call_service(&app, req)
            .await
            .err()
            .unwrap();
        assert_eq!(
            err.as_response_error().status_code(),
            actix_web::http::StatusCode::FORBIDDEN
        );
    }
}
