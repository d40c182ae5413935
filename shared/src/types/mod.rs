//! Type definitions shared between the api and its clients
//!
//! - `response` - success message envelope and health checks

pub mod response;

pub use response::{HealthResponse, HealthStatus, MessageResponse, ServiceHealth};
