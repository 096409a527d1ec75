// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// True for lookups that missed, whether raised here or by the repository.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_) | Self::Domain(DomainError::NotFound(_))
        )
    }
}

/// Uniqueness violations surface as `Conflict`; every other domain error is
/// carried as-is.
impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Conflict(msg) => Self::Conflict(msg),
            other => Self::Domain(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_conflicts_become_application_conflicts() {
        let err = ApplicationError::from(DomainError::Conflict("email already exists".into()));
        assert!(matches!(err, ApplicationError::Conflict(msg) if msg == "email already exists"));
    }

    #[test]
    fn other_domain_errors_are_wrapped() {
        let err = ApplicationError::from(DomainError::NotFound("user not found".into()));
        assert!(err.is_not_found());
        assert!(matches!(err, ApplicationError::Domain(DomainError::NotFound(_))));

        let err = ApplicationError::from(DomainError::Validation("bad".into()));
        assert!(matches!(err, ApplicationError::Domain(DomainError::Validation(_))));
    }
}
