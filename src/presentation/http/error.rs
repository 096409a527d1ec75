use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// Failure response. Lookups that miss become 404; every other failure is
/// reported to the client as 400 with the error message.
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let status = if err.is_not_found() {
            StatusCode::NOT_FOUND
        } else {
            StatusCode::BAD_REQUEST
        };

        let message = match err {
            ApplicationError::Domain(domain_err) => domain_message(domain_err),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "request failed on infrastructure error");
                msg
            }
            ApplicationError::Validation(msg)
            | ApplicationError::NotFound(msg)
            | ApplicationError::Conflict(msg) => msg,
        };

        Self::new(status, message)
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

fn domain_message(err: DomainError) -> String {
    match err {
        DomainError::Persistence(msg) => {
            tracing::error!(error = %msg, "request failed on storage error");
            msg
        }
        DomainError::Validation(msg) | DomainError::Conflict(msg) | DomainError::NotFound(msg) => {
            msg
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let err = HttpError::from_error(ApplicationError::not_found("user not found"));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = HttpError::from_error(ApplicationError::Domain(DomainError::NotFound(
            "user not found".into(),
        )));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "user not found");
    }

    #[test]
    fn everything_else_maps_to_400() {
        let cases = [
            ApplicationError::validation("bad"),
            ApplicationError::Conflict("dup".into()),
            ApplicationError::infrastructure("down"),
            ApplicationError::Domain(DomainError::Conflict("username already exists".into())),
            ApplicationError::Domain(DomainError::Persistence("io".into())),
        ];

        for err in cases {
            assert_eq!(HttpError::from_error(err).status(), StatusCode::BAD_REQUEST);
        }
    }
}
