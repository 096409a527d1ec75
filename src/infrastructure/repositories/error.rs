use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";

const UNIQUE_VIOLATION: &str = "23505";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            unique_violation(db_err.constraint())
        }
        sqlx::Error::Database(db_err) => DomainError::Persistence(db_err.message().to_string()),
        sqlx::Error::RowNotFound => DomainError::NotFound("user not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn unique_violation(constraint: Option<&str>) -> DomainError {
    let message = match constraint {
        Some(CNT_USER_USERNAME) => "username already exists".to_string(),
        Some(CNT_USER_EMAIL) => "email already exists".to_string(),
        Some(other) => format!("unique constraint violated: {other}"),
        None => "unique constraint violated".to_string(),
    };
    DomainError::Conflict(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_keys_map_to_conflicts() {
        assert!(matches!(
            unique_violation(Some(CNT_USER_USERNAME)),
            DomainError::Conflict(msg) if msg == "username already exists"
        ));
        assert!(matches!(
            unique_violation(Some(CNT_USER_EMAIL)),
            DomainError::Conflict(msg) if msg == "email already exists"
        ));
    }

    #[test]
    fn other_unique_violations_are_still_conflicts() {
        assert!(matches!(
            unique_violation(Some("users_pkey")),
            DomainError::Conflict(msg) if msg.contains("users_pkey")
        ));
        assert!(matches!(unique_violation(None), DomainError::Conflict(_)));
    }

    #[test]
    fn missing_row_maps_to_not_found() {
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound(_)
        ));
    }

    #[test]
    fn pool_errors_are_persistence_errors() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
    }
}
