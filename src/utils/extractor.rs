//! 路径参数提取器
//!
//! 在进入处理程序之前校验路径中的 ID，非正整数直接返回 400。

use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::{Ready, ready};

use crate::errors::DiscoveryError;

/// 解析路径中的正整数 ID
fn parse_positive_id(raw: Option<&str>, name: &str) -> Result<i64, DiscoveryError> {
    let raw = raw.ok_or_else(|| DiscoveryError::validation(format!("Missing path parameter: {name}")))?;

    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DiscoveryError::validation(format!(
            "Invalid {name}: must be a positive integer"
        ))),
    }
}

macro_rules! define_safe_id_extractor {
    ($(#[$meta:meta])* $name:ident, $param:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = DiscoveryError;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
                ready(parse_positive_id(req.match_info().get($param), $param).map($name))
            }
        }
    };
}

define_safe_id_extractor!(
    /// 通用 `{id}` 路径参数
    SafeIDI64,
    "id"
);

define_safe_id_extractor!(
    /// `{course_id}` 路径参数
    SafeCourseIdI64,
    "course_id"
);
