//! Mail Service Module
//!
//! Delivers verification emails. Two providers are available:
//!
//! - **HTTP**: transactional email API (Brevo-compatible JSON body)
//! - **Log**: writes the message to the log for development
//!
//! Recipient addresses are masked in every log line and tokens are never
//! logged.

pub mod http_email;
pub mod logging_notifier;
pub mod template;

pub use http_email::HttpEmailNotifier;
pub use logging_notifier::LoggingNotifier;
pub use template::{verification_email_html, VERIFICATION_SUBJECT};

#[cfg(test)]
mod tests;

use std::sync::Arc;

use mv_core::services::VerificationNotifier;
use mv_shared::config::{Environment, MailConfig, MailProvider};

/// Create a notifier based on configuration
///
/// A misconfigured HTTP provider falls back to the logging notifier with a
/// warning. In development the logging notifier also prints the rendered
/// email to stdout.
pub fn create_notifier(config: &MailConfig, environment: Environment) -> Arc<dyn VerificationNotifier> {
    let console_output = environment.is_development();

    match config.provider {
        MailProvider::Log => Arc::new(LoggingNotifier::with_options(console_output, false)),
        MailProvider::Http => match HttpEmailNotifier::new(config) {
            Ok(notifier) => Arc::new(notifier),
            Err(e) => {
                tracing::error!("Failed to initialize HTTP email notifier: {}", e);
                tracing::warn!("Falling back to logging notifier");
                Arc::new(LoggingNotifier::with_options(console_output, false))
            }
        },
    }
}
