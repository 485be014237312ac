//! 跨域配置
//!
//! 所有跨域规则集中在 [`CorsConfig`] 中，此处只负责转换为 actix-cors 中间件。

use actix_cors::Cors;
use tracing::warn;

use crate::config::CorsConfig;

/// 根据配置构建 CORS 中间件
///
/// 来源为显式白名单；不带 `Origin` 的请求直接放行，预检请求对所有路径生效。
pub fn build_cors(config: &CorsConfig) -> Cors {
    let origins = config.allowed_origins.clone();
    let allow_any = origins.iter().any(|o| o == "*");

    if allow_any && config.allow_credentials {
        warn!("CORS allows any origin together with credentials");
    }

    let mut cors = Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            allow_any
                || origin
                    .to_str()
                    .map(|value| origins.iter().any(|allowed| allowed == value))
                    .unwrap_or(false)
        })
        .allowed_methods(config.allowed_methods.iter().map(String::as_str))
        .allowed_headers(config.allowed_headers.iter().map(String::as_str))
        .max_age(config.max_age);

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::{App, HttpResponse, test, web};

    fn cors_config() -> CorsConfig {
        CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
            allowed_methods: vec!["GET".into(), "POST".into(), "PATCH".into(), "DELETE".into()],
            allowed_headers: vec!["content-type".into(), "x-user-id".into()],
            allow_credentials: true,
            max_age: 600,
        }
    }

    #[actix_web::test]
    async fn test_preflight_for_allowed_origin() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&cors_config()))
                .route("/api/courses", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/anything")
            .insert_header((header::ORIGIN, "http://localhost:3000"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "http://localhost:3000"
        );
        assert_eq!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
                .unwrap(),
            "true"
        );
    }

    #[actix_web::test]
    async fn test_unknown_origin_gets_no_allow_header() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&cors_config()))
                .route("/api/courses", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/courses")
            .insert_header((header::ORIGIN, "http://evil.example"))
            .to_request();
        let resp = test::try_call_service(&app, req).await;

        match resp {
            Ok(resp) => assert!(
                resp.headers()
                    .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                    .is_none()
            ),
            Err(err) => assert_eq!(
                err.as_response_error().status_code(),
                StatusCode::BAD_REQUEST
            ),
        }
    }

    #[actix_web::test]
    async fn test_request_without_origin_passes() {
        let app = test::init_service(
            App::new()
                .wrap(build_cors(&cors_config()))
                .route("/api/courses", web::get().to(HttpResponse::Ok)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/courses").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
