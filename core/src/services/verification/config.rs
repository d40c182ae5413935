//! Configuration for the verification service

use mv_shared::config::verification::{VerificationConfig, DEFAULT_TOKEN_LENGTH};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of characters in generated verification tokens
    pub token_length: usize,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            token_length: DEFAULT_TOKEN_LENGTH,
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            token_length: config.token_length,
        }
    }
}
