//! Email verification workflow
//!
//! Registration creates a pending record and sends its token; verification
//! flips the record to verified exactly once; the status check is a pure read.

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::VerificationNotifier;
pub use types::{RegistrationReceipt, RegistrationRequest, REGISTERED_MESSAGE, VERIFIED_MESSAGE};
