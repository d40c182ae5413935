//! User verification route handlers
//!
//! - `POST /user/register`
//! - `GET /user/verify-email/{username}/{verification_token}`
//! - `GET /user/check-verification/{username}`

pub mod check_verification;
pub mod register;
pub mod verify_email;

use mv_core::repositories::UserRepository;
use mv_core::services::{VerificationNotifier, VerificationService};

pub use check_verification::check_verification;
pub use register::register;
pub use verify_email::verify_email;

/// Application state that holds shared services
pub struct AppState<R, N>
where
    R: UserRepository + ?Sized,
    N: VerificationNotifier + ?Sized,
{
    pub verification_service: VerificationService<R, N>,
}

impl<R, N> AppState<R, N>
where
    R: UserRepository + ?Sized,
    N: VerificationNotifier + ?Sized,
{
    pub fn new(verification_service: VerificationService<R, N>) -> Self {
        Self {
            verification_service,
        }
    }
}
