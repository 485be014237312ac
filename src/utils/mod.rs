pub mod extractor;
pub mod parameter_error_handler;
pub mod sql;

pub use extractor::{SafeCourseIdI64, SafeIDI64};
pub use parameter_error_handler::{form_error_handler, json_error_handler, query_error_handler};
pub use sql::{LIKE_ESCAPE, escape_like_pattern};
