//! 配置管理
//!
//! 配置按以下优先级合并：内置默认值 < `config.toml` < `config.{APP_ENV}.toml`
//! < `DISCOVERY__*` 环境变量 < 常用环境变量（`PORT`、`DATABASE_URL` 等）。

mod r#impl;
mod structs;

pub use r#impl::{DEFAULT_PORT, parse_origin_list, parse_port};
pub use structs::*;
