//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称以及 HTTP 状态码。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status() 方法 - 返回对应的 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_discovery_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:expr)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum DiscoveryError {
            $($variant(String),)*
        }

        impl DiscoveryError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(DiscoveryError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(DiscoveryError::$variant(_) => $type_name,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn status(&self) -> StatusCode {
                match self {
                    $(DiscoveryError::$variant(_) => $status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(DiscoveryError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl DiscoveryError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        DiscoveryError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_discovery_errors! {
    DatabaseConfig("E001", "Database Configuration Error", StatusCode::INTERNAL_SERVER_ERROR),
    DatabaseConnection("E002", "Database Connection Error", StatusCode::INTERNAL_SERVER_ERROR),
    DatabaseOperation("E003", "Database Operation Error", StatusCode::INTERNAL_SERVER_ERROR),
    Conflict("E004", "Conflict", StatusCode::CONFLICT),
    Validation("E005", "Validation Error", StatusCode::BAD_REQUEST),
    NotFound("E006", "Resource Not Found", StatusCode::NOT_FOUND),
    Authentication("E007", "Authentication Error", StatusCode::UNAUTHORIZED),
}

impl DiscoveryError {
    /// 将数据库错误包装为带上下文的错误，唯一约束冲突单独归类
    pub fn from_db(context: &str, err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                DiscoveryError::Conflict(format!("{context}: {detail}"))
            }
            _ => DiscoveryError::DatabaseOperation(format!("{context}: {err}")),
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for DiscoveryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for DiscoveryError {}

/// 错误响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}

impl ErrorBody {
    pub fn new(status: StatusCode, message: &str) -> Self {
        let message = if message.trim().is_empty() {
            "Internal Server Error".to_string()
        } else {
            message.to_string()
        };
        Self {
            status: status.as_u16(),
            message,
        }
    }
}

// 兜底错误处理：记录日志后直接生成响应，不再向上抛出
impl ResponseError for DiscoveryError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{} {}", self.code(), self.format_simple());
        } else {
            tracing::debug!("{} {}", self.code(), self.format_simple());
        }
        HttpResponse::build(status).json(ErrorBody::new(status, self.message()))
    }
}

// 为常见的错误类型实现 From trait
impl From<DbErr> for DiscoveryError {
    fn from(err: DbErr) -> Self {
        DiscoveryError::from_db("数据库操作失败", err)
    }
}

pub type Result<T> = std::result::Result<T, DiscoveryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DiscoveryError::database_config("test").code(), "E001");
        assert_eq!(DiscoveryError::conflict("test").code(), "E004");
        assert_eq!(DiscoveryError::validation("test").code(), "E005");
        assert_eq!(DiscoveryError::authentication("test").code(), "E007");
    }

    #[test]
    fn test_error_status() {
        assert_eq!(
            DiscoveryError::validation("bad id").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DiscoveryError::authentication("no user").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            DiscoveryError::not_found("course").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DiscoveryError::conflict("dup").status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            DiscoveryError::database_operation("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message() {
        let err = DiscoveryError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = DiscoveryError::not_found("Course not found");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Course not found"));
    }

    #[test]
    fn test_error_body_defaults_message() {
        let body = ErrorBody::new(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert_eq!(body.status, 500);
        assert_eq!(body.message, "Internal Server Error");
    }

    #[test]
    fn test_plain_db_error_is_not_conflict() {
        let err = DiscoveryError::from_db("查询失败", DbErr::Custom("broken".into()));
        assert_eq!(err.code(), "E003");
        assert!(err.message().contains("broken"));
    }

    #[actix_web::test]
    async fn test_error_response_body() {
        let resp = DiscoveryError::not_found("Course not found").error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let bytes = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], 404);
        assert_eq!(json["message"], "Course not found");
    }
}
