//! # MailVerify Core
//!
//! Core business logic and domain layer for the MailVerify backend.
//! This crate contains the user entity, the verification token generator,
//! the record store and notifier seams, the verification service, and the
//! error taxonomy together with the mapper that renders it for callers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{User, UserField, VerificationStatus};
pub use errors::{map_error, DomainError, DomainResult, ErrorDetail, ErrorReport, StoreError};
pub use repositories::{InMemoryUserRepository, UserPatch, UserRepository};
pub use services::{
    AlphanumericTokenGenerator, RegistrationReceipt, RegistrationRequest, TokenGenerator,
    VerificationNotifier, VerificationService, VerificationServiceConfig,
};
