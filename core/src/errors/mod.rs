//! Domain-specific error types and error handling.

mod mapper;
mod store;


pub use mapper::{map_error, ErrorDetail, ErrorReport, INTERNAL_SERVER_ERROR_MESSAGE};
pub use store::StoreError;

use thiserror::Error;

use crate::domain::entities::user::UserField;

/// Every failure the verification workflow can produce.
///
/// The set is closed: the error mapper matches on the variant, never on
/// message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input failed shape validation; one message per failed rule
    #[error("Validation error: {}", .messages.join(", "))]
    Validation { messages: Vec<String> },

    /// A unique field collided with an existing record
    #[error("User already exists with given {field}")]
    Conflict { field: UserField },

    #[error("User not found")]
    NotFound,

    #[error("User already verified")]
    AlreadyVerified,

    #[error("Invalid verification token")]
    InvalidToken,

    /// The record store rejected the data it was given
    #[error("Store validation failed: {detail}")]
    Store { detail: String },

    /// The record was stored but the verification email could not be sent
    #[error("Failed to send verification email: {message}")]
    Notification { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            messages: vec![message.into()],
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation { field } => DomainError::Conflict { field },
            StoreError::NotFound => DomainError::NotFound,
            StoreError::PreconditionFailed => DomainError::AlreadyVerified,
            StoreError::Rejected { detail } => DomainError::Store { detail },
            StoreError::Backend { message } => DomainError::Internal { message },
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
