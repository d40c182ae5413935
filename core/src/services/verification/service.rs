//! Main verification service implementation

use std::sync::Arc;

use chrono::Utc;
use constant_time_eq::constant_time_eq;
use mv_shared::types::ServiceHealth;
use mv_shared::utils::email::mask_email;

use crate::domain::entities::user::{User, VerificationStatus};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::user::{UserPatch, UserRepository};
use crate::services::token_generator::{AlphanumericTokenGenerator, TokenGenerator};

use super::config::VerificationServiceConfig;
use super::traits::VerificationNotifier;
use super::types::{RegistrationReceipt, RegistrationRequest};

/// Public health message for a failing store; driver detail stays in the log
const STORE_UNAVAILABLE_MESSAGE: &str = "Record store unavailable";

/// Drives a user record through `PendingVerification -> Verified`.
///
/// The service keeps no state of its own between calls. Conflicting writes
/// are serialized by the repository.
pub struct VerificationService<R, N, G = AlphanumericTokenGenerator>
where
    R: UserRepository + ?Sized,
    N: VerificationNotifier + ?Sized,
    G: TokenGenerator + ?Sized,
{
    /// Record store
    repository: Arc<R>,
    /// Outbound email delivery
    notifier: Arc<N>,
    /// Source of verification tokens
    token_generator: Arc<G>,
}

impl<R, N> VerificationService<R, N, AlphanumericTokenGenerator>
where
    R: UserRepository + ?Sized,
    N: VerificationNotifier + ?Sized,
{
    /// Create a service with the default six-character token generator
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self::with_generator(
            repository,
            notifier,
            Arc::new(AlphanumericTokenGenerator::default()),
        )
    }

    /// Create a service whose token length comes from configuration
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Validation)` - The configured token length is zero
    pub fn with_config(
        repository: Arc<R>,
        notifier: Arc<N>,
        config: VerificationServiceConfig,
    ) -> DomainResult<Self> {
        let generator = AlphanumericTokenGenerator::new(config.token_length)?;
        Ok(Self::with_generator(repository, notifier, Arc::new(generator)))
    }
}

impl<R, N, G> VerificationService<R, N, G>
where
    R: UserRepository + ?Sized,
    N: VerificationNotifier + ?Sized,
    G: TokenGenerator + ?Sized,
{
    pub fn with_generator(repository: Arc<R>, notifier: Arc<N>, token_generator: Arc<G>) -> Self {
        Self {
            repository,
            notifier,
            token_generator,
        }
    }

    /// Register a new user and send them a verification token
    ///
    /// This method:
    /// 1. Validates the username and email shape
    /// 2. Generates a fresh token
    /// 3. Persists the pending record
    /// 4. Awaits delivery of the verification email
    ///
    /// A delivery failure does not remove the stored record; the caller gets
    /// `DomainError::Notification` and the user stays pending.
    ///
    /// # Returns
    ///
    /// * `Ok(RegistrationReceipt)` - Record stored and email sent
    /// * `Err(DomainError::Validation)` - Malformed username or email
    /// * `Err(DomainError::Conflict)` - Username or email already registered
    pub async fn register(&self, request: RegistrationRequest) -> DomainResult<RegistrationReceipt> {
        request.check()?;

        let RegistrationRequest { username, email } = request;
        let masked = mask_email(&email);
        let token = self.token_generator.generate();

        let user = self
            .repository
            .create(User::new(username, email, token))
            .await
            .map_err(|e| {
                let err = DomainError::from(e);
                tracing::warn!(
                    email = %masked,
                    error = %err,
                    event = "user_registration_rejected",
                    "User registration rejected by store"
                );
                err
            })?;

        tracing::info!(
            username = %user.username,
            email = %masked,
            event = "user_registered",
            "Stored pending user record"
        );

        let message_id = self
            .notifier
            .send_verification(&user.username, &user.email, &user.verification_token)
            .await
            .map_err(|e| {
                tracing::error!(
                    username = %user.username,
                    email = %masked,
                    provider = self.notifier.provider_name(),
                    error = %e,
                    event = "verification_email_failed",
                    "Failed to send verification email"
                );
                DomainError::Notification { message: e }
            })?;

        tracing::info!(
            username = %user.username,
            message_id = %message_id,
            provider = self.notifier.provider_name(),
            event = "verification_email_sent",
            "Verification email sent"
        );

        Ok(RegistrationReceipt {
            username: user.username,
            masked_email: masked,
            message_id,
        })
    }

    /// Confirm a user's email with the token they were sent
    ///
    /// Checks run in a fixed order: existence, then verification status,
    /// then token equality.
    pub async fn verify_email(&self, username: &str, token: &str) -> DomainResult<()> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(DomainError::NotFound)?;

        if user.is_verified {
            tracing::debug!(
                username = username,
                event = "verification_repeated",
                "User already verified"
            );
            return Err(DomainError::AlreadyVerified);
        }

        if !constant_time_eq(token.as_bytes(), user.verification_token.as_bytes()) {
            tracing::warn!(
                username = username,
                event = "verification_token_mismatch",
                "Invalid verification token"
            );
            return Err(DomainError::InvalidToken);
        }

        // A concurrent verify may win between the read and this write; the
        // conditional patch turns that into AlreadyVerified.
        let updated = self
            .repository
            .update(username, UserPatch::mark_verified(Utc::now()))
            .await?;

        tracing::info!(
            username = username,
            verified_at = ?updated.verified_at,
            event = "user_verified",
            "User email verified"
        );

        Ok(())
    }

    /// Report whether a user has verified their email
    pub async fn check_verification(&self, username: &str) -> DomainResult<VerificationStatus> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or(DomainError::NotFound)?;

        Ok(user.status())
    }

    /// Probe the record store for the health endpoint
    pub async fn store_health(&self) -> ServiceHealth {
        match self.repository.ping().await {
            Ok(()) => ServiceHealth::healthy(),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    event = "store_health_failed",
                    "Record store health check failed"
                );
                ServiceHealth::unhealthy(STORE_UNAVAILABLE_MESSAGE)
            }
        }
    }

    /// Name of the configured notifier
    pub fn notifier_name(&self) -> &str {
        self.notifier.provider_name()
    }
}

impl<R, N, G> Clone for VerificationService<R, N, G>
where
    R: UserRepository + ?Sized,
    N: VerificationNotifier + ?Sized,
    G: TokenGenerator + ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            notifier: Arc::clone(&self.notifier),
            token_generator: Arc::clone(&self.token_generator),
        }
    }
}
