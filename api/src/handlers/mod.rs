//! Error rendering shared by every route

pub mod error;

pub use error::{json_error_handler, not_found, ApiError};
