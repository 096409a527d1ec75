// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// One-way salted hash; every call draws a fresh salt.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
}
