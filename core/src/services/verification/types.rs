//! Request and result types for the verification service

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::{DomainError, DomainResult};

/// Confirmation returned by a successful registration
pub const REGISTERED_MESSAGE: &str = "User successfully registered";

/// Confirmation returned by a successful verification
pub const VERIFIED_MESSAGE: &str = "User successfully verified";

const BLANK_USERNAME_MESSAGE: &str = "username should not be empty";

/// Input to [`register`](super::VerificationService::register)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(length(min = 1, message = "username should not be empty"))]
    pub username: String,

    #[validate(email(message = "email must be an email"))]
    pub email: String,
}

impl RegistrationRequest {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    /// Run the shape rules, collecting every failure message in sorted order
    pub fn check(&self) -> DomainResult<()> {
        let mut messages: Vec<String> = match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .field_errors()
                .into_values()
                .flat_map(|errs| errs.iter())
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => err.code.to_string(),
                })
                .collect(),
        };

        // A whitespace-only username passes the length rule
        if self.username.trim().is_empty() {
            messages.push(BLANK_USERNAME_MESSAGE.to_string());
        }

        if messages.is_empty() {
            return Ok(());
        }

        messages.sort();
        messages.dedup();

        Err(DomainError::Validation { messages })
    }
}

/// Outcome of a registration. The verification token is never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationReceipt {
    pub username: String,
    /// Email with the local part masked, safe to log or echo
    pub masked_email: String,
    /// Message id reported by the notifier
    pub message_id: String,
}

impl RegistrationReceipt {
    pub fn message(&self) -> &'static str {
        REGISTERED_MESSAGE
    }
}
