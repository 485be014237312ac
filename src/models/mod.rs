//! 业务数据模型
//!
//! `entities` 为对外的业务实体，`requests` 为请求/存储层入参，`responses` 为组合后的响应体。
//! 所有 JSON 字段使用 camelCase。

pub mod applications;
pub mod counselors;
pub mod courses;
pub mod favorites;
pub mod notifications;
pub mod tutorials;
pub mod universities;
pub mod users;
