//! Mock implementations for testing verification service

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::user::User;
use crate::errors::StoreError;
use crate::repositories::user::{InMemoryUserRepository, UserPatch, UserRepository};
use crate::services::token_generator::TokenGenerator;
use crate::services::verification::VerificationNotifier;

/// A notification the service asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentVerification {
    pub username: String,
    pub email: String,
    pub token: String,
}

// Mock notifier recording every call
pub struct RecordingNotifier {
    pub calls: Mutex<Vec<SentVerification>>,
    pub should_fail: bool,
}

impl RecordingNotifier {
    pub fn new(should_fail: bool) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            should_fail,
        }
    }

    pub fn sent(&self) -> Vec<SentVerification> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_token_for(&self, username: &str) -> Option<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|c| c.username == username)
            .map(|c| c.token.clone())
    }
}

#[async_trait]
impl VerificationNotifier for RecordingNotifier {
    async fn send_verification(
        &self,
        username: &str,
        email: &str,
        token: &str,
    ) -> Result<String, String> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(SentVerification {
            username: username.to_string(),
            email: email.to_string(),
            token: token.to_string(),
        });
        if self.should_fail {
            return Err("Mail service error".to_string());
        }
        Ok(format!("mock-mail-{}", calls.len()))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

// Always hands out the same token
pub struct FixedTokenGenerator(pub &'static str);

impl TokenGenerator for FixedTokenGenerator {
    fn generate(&self) -> String {
        self.0.to_string()
    }
}

// In-memory repository that counts calls and can inject failures
#[derive(Default)]
pub struct CountingRepository {
    pub inner: InMemoryUserRepository,
    pub creates: AtomicUsize,
    pub finds: AtomicUsize,
    pub updates: AtomicUsize,
    pub create_failure: Option<StoreError>,
    pub find_failure: Option<StoreError>,
}

impl CountingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_create(error: StoreError) -> Self {
        Self {
            create_failure: Some(error),
            ..Self::default()
        }
    }

    pub fn failing_find(error: StoreError) -> Self {
        Self {
            find_failure: Some(error),
            ..Self::default()
        }
    }

    pub fn update_count(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn create_count(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for CountingRepository {
    async fn create(&self, user: User) -> Result<User, StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.create_failure {
            return Err(err.clone());
        }
        self.inner.create(user).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.find_failure {
            return Err(err.clone());
        }
        self.inner.find_by_username(username).await
    }

    async fn update(&self, username: &str, patch: UserPatch) -> Result<User, StoreError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(username, patch).await
    }

    async fn ping(&self) -> Result<(), StoreError> {
        match &self.find_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}
