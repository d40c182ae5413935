//! Logging Notifier
//!
//! Development notifier that records verification emails in the log instead
//! of sending them. With console output enabled the rendered email, code
//! included, is printed to stdout so a developer can finish the flow locally.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use mv_core::services::VerificationNotifier;
use mv_shared::utils::email::mask_email;

use super::template::{verification_email_html, VERIFICATION_SUBJECT};

/// Notifier that logs instead of sending
#[derive(Clone)]
pub struct LoggingNotifier {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl LoggingNotifier {
    pub fn new() -> Self {
        Self::with_options(false, false)
    }

    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Number of messages sent so far
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for LoggingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationNotifier for LoggingNotifier {
    async fn send_verification(
        &self,
        username: &str,
        email: &str,
        token: &str,
    ) -> Result<String, String> {
        let masked_email = mask_email(email);

        if self.simulate_failure {
            warn!(
                "Logging notifier simulating failure for email: {}",
                masked_email
            );
            return Err("Simulated email sending failure".to_string());
        }

        let message_id = format!("log_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("LOGGING MAIL NOTIFIER - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {} <{}>", username, email);
            println!("Subject: {}", VERIFICATION_SUBJECT);
            println!("Message ID: {}", message_id);
            println!("{}", verification_email_html(username, token));
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "mail_service",
            provider = "log",
            username = username,
            email = %masked_email,
            message_id = %message_id,
            "Verification email recorded (log)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "log"
    }
}
