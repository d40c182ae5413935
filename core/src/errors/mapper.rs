//! Renders [`DomainError`] into the `{statusCode, response}` pair callers see.
//!
//! | Error                | statusCode | response                                  |
//! |----------------------|------------|-------------------------------------------|
//! | `Validation`         | 400        | validation message(s)                     |
//! | `Conflict`           | 409        | "User already exists with given <field>"  |
//! | `NotFound`           | 404        | "User not found"                          |
//! | `AlreadyVerified`    | 400        | "User already verified"                   |
//! | `InvalidToken`       | 400        | "Invalid verification token"              |
//! | `Store`              | 422        | store detail with newlines removed        |
//! | `Notification`       | 500        | "Internal Server Error"                   |
//! | `Internal`           | 500        | "Internal Server Error"                   |

use serde::{Deserialize, Serialize};

use super::DomainError;

pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal Server Error";

/// Response payload: a single message or the list of validation messages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Messages(Vec<String>),
}

impl ErrorDetail {
    /// First (or only) message
    pub fn first(&self) -> Option<&str> {
        match self {
            ErrorDetail::Message(m) => Some(m.as_str()),
            ErrorDetail::Messages(m) => m.first().map(String::as_str),
        }
    }
}

/// Externally observable failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub status_code: u16,
    pub response: ErrorDetail,
}

impl ErrorReport {
    pub fn new(status_code: u16, response: impl Into<String>) -> Self {
        Self {
            status_code,
            response: ErrorDetail::Message(response.into()),
        }
    }

    pub fn internal() -> Self {
        Self::new(500, INTERNAL_SERVER_ERROR_MESSAGE)
    }
}

/// Map a domain failure onto its status code and caller-facing message
pub fn map_error(error: &DomainError) -> ErrorReport {
    match error {
        DomainError::Validation { messages } => {
            let response = match messages.as_slice() {
                [] => ErrorDetail::Message("Validation failed".to_string()),
                [only] => ErrorDetail::Message(only.clone()),
                many => ErrorDetail::Messages(many.to_vec()),
            };
            ErrorReport {
                status_code: 400,
                response,
            }
        }
        DomainError::Conflict { .. } => ErrorReport::new(409, error.to_string()),
        DomainError::NotFound => ErrorReport::new(404, error.to_string()),
        DomainError::AlreadyVerified | DomainError::InvalidToken => {
            ErrorReport::new(400, error.to_string())
        }
        DomainError::Store { detail } => ErrorReport::new(422, strip_newlines(detail)),
        DomainError::Notification { .. } | DomainError::Internal { .. } => ErrorReport::internal(),
    }
}

fn strip_newlines(detail: &str) -> String {
    detail.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}
