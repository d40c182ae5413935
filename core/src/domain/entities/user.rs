//! User entity representing an account awaiting or holding email verification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The uniquely-constrained fields of a user record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserField {
    Username,
    Email,
}

impl UserField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Username => "username",
            UserField::Email => "email",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity
///
/// Created once by registration and mutated once by verification. The
/// `username` is the lookup key and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account name, primary lookup key
    pub username: String,

    /// Unique email address the verification token is sent to
    pub email: String,

    /// One-time alphanumeric code assigned at registration
    pub verification_token: String,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Timestamp when the user was registered
    pub created_at: DateTime<Utc>,

    /// Timestamp when the email was verified
    pub verified_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new, unverified user
    pub fn new(username: String, email: String, verification_token: String) -> Self {
        Self {
            username,
            email,
            verification_token,
            is_verified: false,
            created_at: Utc::now(),
            verified_at: None,
        }
    }

    /// Marks the user as verified. Calling it on a verified user keeps the
    /// original verification time.
    pub fn verify(&mut self, at: DateTime<Utc>) {
        if !self.is_verified {
            self.is_verified = true;
            self.verified_at = Some(at);
        }
    }

    pub fn status(&self) -> VerificationStatus {
        VerificationStatus::from(self.is_verified)
    }
}

/// Two-valued answer of a verification check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    Verified,
    NotVerified,
}

impl VerificationStatus {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationStatus::Verified)
    }

    /// Short machine-readable form
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "verified",
            VerificationStatus::NotVerified => "not verified",
        }
    }

    /// Sentence returned to callers
    pub fn message(&self) -> &'static str {
        match self {
            VerificationStatus::Verified => "User is verified",
            VerificationStatus::NotVerified => "User is not verified",
        }
    }
}

impl From<bool> for VerificationStatus {
    fn from(is_verified: bool) -> Self {
        if is_verified {
            VerificationStatus::Verified
        } else {
            VerificationStatus::NotVerified
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
