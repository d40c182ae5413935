//! Shared utilities and common types for the MailVerify server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelopes
//! - Utility functions (email masking for logs)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, DatabaseConfig, Environment, LoggingConfig, MailConfig,
    MailProvider, ServerConfig, StoreBackend, StoreConfig, VerificationConfig,
};
pub use types::{HealthResponse, HealthStatus, MessageResponse, ServiceHealth};
pub use utils::email;
