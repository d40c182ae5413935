//! Outbound mail configuration

use serde::{Deserialize, Serialize};

/// Which notifier delivers verification emails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Write the message to the log instead of sending it
    #[default]
    Log,
    /// Transactional email HTTP API
    Http,
}

/// Mail provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    #[serde(default)]
    pub provider: MailProvider,

    /// Transactional email endpoint
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API key sent in the `api-key` header
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address shown to recipients
    #[serde(default = "default_sender_email")]
    pub sender_email: String,

    #[serde(default)]
    pub sender_name: Option<String>,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Attempts before giving up on a retryable failure
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial backoff between attempts in milliseconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::default(),
            api_url: default_api_url(),
            api_key: None,
            sender_email: default_sender_email(),
            sender_name: None,
            request_timeout_secs: default_request_timeout(),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay(),
        }
    }
}

impl MailConfig {
    /// True when every field the HTTP provider needs is present
    pub fn is_http_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
            && !self.sender_email.trim().is_empty()
            && !self.api_url.trim().is_empty()
    }
}

fn default_api_url() -> String {
    String::from("https://api.brevo.com/v3/smtp/email")
}

fn default_sender_email() -> String {
    String::from("no-reply@mailverify.local")
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    500
}
