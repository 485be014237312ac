/*!
 * 请求身份中间件
 *
 * 从 `x-user-id` 请求头读取调用方身份，写入请求扩展；不做任何校验。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::{CurrentUser, IdentifyUser};
 *
 * async fn handler(user: CurrentUser) -> String {
 *     user.id().to_string()
 * }
 *
 * App::new()
 *     .wrap(IdentifyUser)
 *     .route("/api/favorites", web::get().to(handler))
 * ```
 *
 * 需要身份的处理程序使用 [`CurrentUser`] 提取器，请求头缺失时返回 401。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, FromRequest, HttpMessage, HttpRequest,
    dev::{Payload, ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;

use crate::errors::DiscoveryError;

pub const USER_ID_HEADER: &str = "x-user-id";

/// 请求方身份
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUser {
    id: String,
}

impl RequestUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn from_request_headers(req: &ServiceRequest) -> Option<Self> {
        req.headers()
            .get(USER_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(Self::new)
    }
}

#[derive(Clone)]
pub struct IdentifyUser;

impl<S, B> Transform<S, ServiceRequest> for IdentifyUser
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = IdentifyUserMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(IdentifyUserMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct IdentifyUserMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for IdentifyUserMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
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
        Box::pin(async move {
            if let Some(user) = RequestUser::from_request_headers(&req) {
                req.extensions_mut().insert(user);
            }
            srv.call(req).await
        })
    }
}

/// 当前用户提取器，请求未携带身份时返回 401
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub RequestUser);

impl CurrentUser {
    pub fn id(&self) -> &str {
        self.0.id()
    }
}

impl FromRequest for CurrentUser {
    type Error = DiscoveryError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user = req.extensions().get::<RequestUser>().cloned();
        ready(user.map(CurrentUser).ok_or_else(|| {
            DiscoveryError::authentication(format!("Missing {USER_ID_HEADER} header"))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};

    async fn whoami(user: CurrentUser) -> HttpResponse {
        HttpResponse::Ok().body(user.id().to_string())
    }

    #[actix_web::test]
    async fn test_header_becomes_current_user() {
        let app = test::init_service(
            App::new()
                .wrap(IdentifyUser)
                .route("/api/me", web::get().to(whoami)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header((USER_ID_HEADER, " user-7 "))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "user-7");
    }

    #[actix_web::test]
    async fn test_missing_header_is_unauthorized() {
        let app = test::init_service(
            App::new()
                .wrap(IdentifyUser)
                .route("/api/me", web::get().to(whoami)),
        )
        .await;

        for req in [
            test::TestRequest::get().uri("/api/me").to_request(),
            test::TestRequest::get()
                .uri("/api/me")
                .insert_header((USER_ID_HEADER, "   "))
                .to_request(),
        ] {
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
    }
}
