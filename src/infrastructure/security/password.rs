use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Argon2,
    password_hash::{PasswordHasher as _, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;

#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    fn matches(password: &str, hash: &str) -> bool {
        let parsed = PasswordHash::new(hash).unwrap();
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }

    #[tokio::test]
    async fn hashes_are_salted_and_verifiable() {
        let hasher = Argon2PasswordHasher;

        let first = hasher.hash("pw1").await.unwrap();
        let second = hasher.hash("pw1").await.unwrap();

        assert_ne!(first, second);
        assert_ne!(first, "pw1");
        assert!(first.starts_with("$argon2"));
        assert!(matches("pw1", &first));
        assert!(matches("pw1", &second));
    }

    #[tokio::test]
    async fn wrong_password_does_not_match() {
        let hash = Argon2PasswordHasher.hash("pw1").await.unwrap();

        assert!(!matches("pw2", &hash));
    }
}
