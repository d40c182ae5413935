//! Verification token configuration

use serde::{Deserialize, Serialize};

/// Length of generated verification tokens
pub const DEFAULT_TOKEN_LENGTH: usize = 6;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Number of alphanumeric characters in a verification token
    #[serde(default = "default_token_length")]
    pub token_length: usize,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            token_length: default_token_length(),
        }
    }
}

fn default_token_length() -> usize {
    DEFAULT_TOKEN_LENGTH
}
