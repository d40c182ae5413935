//! Business services containing domain logic and use cases.

pub mod token_generator;
pub mod verification;

// Re-export commonly used types
pub use token_generator::{generate_alphanumeric, AlphanumericTokenGenerator, TokenGenerator};
pub use verification::{
    RegistrationReceipt, RegistrationRequest, VerificationNotifier, VerificationService,
    VerificationServiceConfig, REGISTERED_MESSAGE, VERIFIED_MESSAGE,
};
