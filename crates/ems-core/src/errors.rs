//! Application error taxonomy.
//!
//! Every failure that reaches a handler boundary is an [`AppError`]. The
//! [`ErrorKind`] decides the HTTP status, the wrapped [`anyhow::Error`] carries
//! the message (and, for internal failures, the underlying cause).
//!
//! | Kind | Status |
//! |------|--------|
//! | `Validation` | 400 |
//! | `Unauthorized` | 401 |
//! | `Forbidden` | 403 |
//! | `NotFound` | 404 |
//! | `Conflict` | 400 |
//! | `Internal` | 500 |

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            // Duplicates are reported as a plain bad request.
            ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A single rejected input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// JSON body returned for every error.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
    pub field_errors: Vec<FieldError>,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, Error::msg(message.into()))
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Validation, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Conflict, err)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, Error::msg(message.into()))
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, Error::msg(message.into()))
    }

    /// Builds a validation error that lists every rejected field.
    pub fn validation(field_errors: Vec<FieldError>) -> Self {
        Self {
            kind: ErrorKind::Validation,
            error: anyhow!("Validation failed"),
            field_errors,
        }
    }

    /// Shorthand for a validation error on one field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::validation(vec![FieldError::new(field, message)])
    }

    /// Flattens `validator` output into field errors, sorted by field name so
    /// responses are stable.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let message = error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    FieldError::new(field.to_string(), message)
                })
            })
            .collect();
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));
        Self::validation(field_errors)
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.error)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let details = if self.kind == ErrorKind::Internal {
            tracing::error!(error = ?self.error, "internal error");
            Some(self.error.root_cause().to_string())
        } else {
            None
        };

        let body = ErrorResponse {
            error: self.error.to_string(),
            errors: self.field_errors,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
