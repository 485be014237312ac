pub mod access_log;
pub mod cors;
pub mod identity;

pub use access_log::AccessLog;
pub use cors::build_cors;
pub use identity::{CurrentUser, IdentifyUser, RequestUser};
