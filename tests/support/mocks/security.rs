// tests/support/mocks/security.rs
use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use user_registry::application::ApplicationResult;

pub const PLAIN_PREFIX: &str = "salted";

/// Cheap stand-in for argon2: every hash embeds a new counter value as its
/// salt, so hashing the same password twice never yields the same string.
#[derive(Debug, Default)]
pub struct CountingPasswordHasher {
    next_salt: AtomicU64,
}

#[async_trait]
impl user_registry::application::ports::security::PasswordHasher for CountingPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let salt = self.next_salt.fetch_add(1, Ordering::SeqCst);
        Ok(format!("{PLAIN_PREFIX}:{salt}:{password}"))
    }
}
