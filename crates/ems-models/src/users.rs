//! User account models and DTOs.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use ems_core::Role;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::text::validate_text;

use crate::ids::UserId;

/// A user account as exposed over the API. The password digest is never
/// selected into this type.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The columns login needs. Only used inside the auth service.
#[derive(FromRow, Debug, Clone)]
pub struct UserCredentials {
    pub id: UserId,
    pub role: Role,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Name is required."),
        custom(function = "validate_text")
    )]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Username is required."),
        custom(function = "validate_text")
    )]
    #[schema(example = "jane")]
    pub username: String,
    #[serde(default)]
    #[validate(
        email(message = "Valid email is required."),
        custom(function = "validate_text")
    )]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(
        length(min = 6, message = "Password must be at least 6 characters long."),
        custom(function = "validate_text")
    )]
    #[schema(example = "secret1")]
    pub password: String,
    /// One of `admin`, `hr`, `manager`, `employee`. Defaults to `employee`.
    #[validate(custom(function = "validate_role"))]
    #[schema(example = "employee")]
    pub role: Option<String>,
}

impl SignupRequest {
    /// The requested role, or the default when none was given.
    pub fn role(&self) -> Role {
        self.role
            .as_deref()
            .and_then(|role| role.parse().ok())
            .unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct SignupResponse {
    pub message: String,
    pub user_id: UserId,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(
        email(message = "Valid email is required."),
        custom(function = "validate_text")
    )]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Password is required."),
        custom(function = "validate_text")
    )]
    #[schema(example = "secret1")]
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Partial update of a user account. Absent fields are left unchanged.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateUserDto {
    #[validate(
        length(min = 1, message = "Name cannot be empty."),
        custom(function = "validate_text")
    )]
    pub name: Option<String>,
    #[validate(
        length(min = 1, message = "Username cannot be empty."),
        custom(function = "validate_text")
    )]
    pub username: Option<String>,
    #[validate(
        email(message = "Valid email is required."),
        custom(function = "validate_text")
    )]
    pub email: Option<String>,
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
    /// Re-hashed before it is stored.
    #[validate(
        length(min = 6, message = "Password must be at least 6 characters long."),
        custom(function = "validate_text")
    )]
    pub password: Option<String>,
}

impl UpdateUserDto {
    pub fn role(&self) -> Option<Role> {
        self.role.as_deref().and_then(|role| role.parse().ok())
    }
}

fn validate_role(role: &str) -> Result<(), ValidationError> {
    role.parse::<Role>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("role").with_message(Cow::Borrowed("Invalid role")))
}
