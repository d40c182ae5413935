//! Failure signals raised by record store implementations

use thiserror::Error;

use crate::domain::entities::user::UserField;

/// Errors a [`UserRepository`](crate::repositories::UserRepository) may return
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Insert collided with an existing username or email
    #[error("Unique constraint failed on the field: {field}")]
    UniqueViolation { field: UserField },

    /// No record with the given key
    #[error("Record not found")]
    NotFound,

    /// A conditional update found the record in an unexpected state
    #[error("Record precondition failed")]
    PreconditionFailed,

    /// The store refused the values it was given (type, length, nullability)
    #[error("Store validation failed: {detail}")]
    Rejected { detail: String },

    /// Connection, driver, or decoding failure
    #[error("Store backend error: {message}")]
    Backend { message: String },
}

impl StoreError {
    pub fn backend(message: impl Into<String>) -> Self {
        StoreError::Backend {
            message: message.into(),
        }
    }
}
