use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderValue, header, request::Parts},
    middleware::Next,
    response::Response,
};

use ems_auth::{Claims, verify_token};
use ems_core::{AppError, Role};
use ems_models::UserId;

use crate::middleware::policy::{Access, route_access};
use crate::state::AppState;

/// Pulls the token out of an `Authorization` header value.
///
/// `Bearer <token>` is the expected form; a bare token is accepted too.
pub fn extract_token(header: Option<&HeaderValue>) -> Result<&str, AppError> {
    let value = header.ok_or_else(|| AppError::unauthorized("No token provided"))?;
    let value = value
        .to_str()
        .map_err(|_| AppError::unauthorized("Invalid token format"))?
        .trim();

    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ if value.eq_ignore_ascii_case("bearer") => "",
        _ => value,
    };

    if token.is_empty() {
        return Err(AppError::unauthorized("Invalid token format"));
    }

    Ok(token)
}

/// Verifies the bearer token of every non-public route and stores the
/// decoded [`Claims`] in the request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if route_access(&req) == Access::Public {
        return Ok(next.run(req).await);
    }

    let token = extract_token(req.headers().get(header::AUTHORIZATION))?;
    let claims = verify_token(token, &state.jwt_config)?;

    tracing::debug!(user_id = %claims.sub, role = %claims.role, "token verified");

    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// The identity attached by [`authenticate`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<UserId, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized("Invalid token"))
    }

    pub fn role(&self) -> Role {
        self.0.role
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| AppError::unauthorized("User not authenticated"))
    }
}
