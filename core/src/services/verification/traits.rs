//! Traits for outbound notification integration

use async_trait::async_trait;

/// Delivers the verification token to the address being verified
#[async_trait]
pub trait VerificationNotifier: Send + Sync {
    /// Send the verification message; returns the provider's message id
    async fn send_verification(
        &self,
        username: &str,
        email: &str,
        token: &str,
    ) -> Result<String, String>;

    /// Name of the delivery provider, for logs and health output
    fn provider_name(&self) -> &str;
}
