//! 请求体与查询参数解析失败时的统一响应

use actix_web::error::{JsonPayloadError, QueryPayloadError, UrlencodedError};
use actix_web::{Error, HttpRequest};
use tracing::debug;

use crate::errors::DiscoveryError;

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);
    DiscoveryError::validation(format!("Invalid JSON payload: {err}")).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query string error on {}: {}", req.path(), err);
    DiscoveryError::validation(format!("Invalid query parameters: {err}")).into()
}

pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> Error {
    debug!("Form payload error on {}: {}", req.path(), err);
    DiscoveryError::validation(format!("Invalid form payload: {err}")).into()
}
