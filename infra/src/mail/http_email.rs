//! HTTP Email Notifier
//!
//! Sends verification emails through a transactional email API that accepts
//! a Brevo-style JSON body:
//!
//! ```json
//! {
//!   "sender": { "email": "no-reply@example.com", "name": "MailVerify" },
//!   "to": [{ "email": "alice@example.com", "name": "alice" }],
//!   "subject": "Email verification",
//!   "htmlContent": "<html>...</html>"
//! }
//! ```
//!
//! Requests carry the key in an `api-key` header. Rate limiting (429) and
//! server errors (5xx) are retried with exponential backoff; other client
//! errors fail immediately.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use mv_core::services::VerificationNotifier;
use mv_shared::config::MailConfig;
use mv_shared::utils::email::mask_email;

use super::template::{verification_email_html, VERIFICATION_SUBJECT};
use crate::InfrastructureError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SendEmailBody {
    sender: EmailAddress,
    to: Vec<EmailAddress>,
    subject: String,
    html_content: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailResponse {
    message_id: Option<String>,
}

/// Verification notifier backed by an HTTP email API
pub struct HttpEmailNotifier {
    client: Client,
    api_url: String,
    api_key: String,
    sender_email: String,
    sender_name: Option<String>,
    max_retries: u32,
    retry_delay: Duration,
}

impl HttpEmailNotifier {
    /// Create a notifier from mail configuration
    ///
    /// # Returns
    ///
    /// * `Err(InfrastructureError::Config)` - API key, sender or URL missing
    /// * `Err(InfrastructureError::Http)` - HTTP client could not be built
    pub fn new(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let api_key = match config.api_key.as_deref().map(str::trim) {
            Some(key) if config.is_http_configured() => key.to_string(),
            _ => {
                return Err(InfrastructureError::Config(
                    "mail.api_key, mail.sender_email and mail.api_url are required for the http provider"
                        .to_string(),
                ))
            }
        };

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "HTTP email notifier initialized with sender: {}",
            mask_email(&config.sender_email)
        );

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
            sender_email: config.sender_email.clone(),
            sender_name: config.sender_name.clone(),
            max_retries: config.max_retries.max(1),
            retry_delay: Duration::from_millis(config.retry_delay_ms),
        })
    }

    pub(crate) fn build_body(&self, username: &str, email: &str, token: &str) -> SendEmailBody {
        SendEmailBody {
            sender: EmailAddress {
                email: self.sender_email.clone(),
                name: self.sender_name.clone(),
            },
            to: vec![EmailAddress {
                email: email.to_string(),
                name: Some(username.to_string()),
            }],
            subject: VERIFICATION_SUBJECT.to_string(),
            html_content: verification_email_html(username, token),
        }
    }

    /// Post the email, retrying transient failures
    async fn send_with_retry(
        &self,
        body: &SendEmailBody,
        masked_to: &str,
    ) -> Result<String, InfrastructureError> {
        let mut attempts = 0;
        let mut delay = self.retry_delay;

        loop {
            attempts += 1;

            debug!(
                "Sending email attempt {}/{} to {}",
                attempts, self.max_retries, masked_to
            );

            let failure = match self
                .client
                .post(&self.api_url)
                .header("api-key", &self.api_key)
                .header("Accept", "application/json")
                .json(body)
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => {
                    let message_id = response
                        .json::<SendEmailResponse>()
                        .await
                        .ok()
                        .and_then(|r| r.message_id)
                        .unwrap_or_else(|| format!("http-{}", Uuid::new_v4()));
                    info!(
                        "Email sent successfully to {} with id: {}",
                        masked_to, message_id
                    );
                    return Ok(message_id);
                }
                Ok(response) => {
                    let status = response.status();
                    let text = response.text().await.unwrap_or_default();
                    if !is_retryable_status(status) {
                        error!("Email API rejected request (status={}): {}", status, text);
                        return Err(InfrastructureError::Mail(format!(
                            "Email API rejected request (status={}): {}",
                            status, text
                        )));
                    }
                    format!("status={}: {}", status, text)
                }
                Err(e) => {
                    if e.is_builder() {
                        return Err(InfrastructureError::Http(e));
                    }
                    e.to_string()
                }
            };

            error!(
                "Failed to send email (attempt {}/{}): {}",
                attempts, self.max_retries, failure
            );

            if attempts >= self.max_retries {
                return Err(InfrastructureError::Mail(format!(
                    "Failed to send email after {} attempts: {}",
                    self.max_retries, failure
                )));
            }

            warn!("Retrying email delivery after {:?}", delay);
            tokio::time::sleep(delay).await;
            delay *= 2;
        }
    }
}

/// Rate limiting and server errors are worth another attempt
pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

#[async_trait]
impl VerificationNotifier for HttpEmailNotifier {
    async fn send_verification(
        &self,
        username: &str,
        email: &str,
        token: &str,
    ) -> Result<String, String> {
        let masked_to = mask_email(email);
        let body = self.build_body(username, email, token);

        self.send_with_retry(&body, &masked_to)
            .await
            .map_err(|e| e.to_string())
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
