use axum::{Json, extract::State, http::StatusCode};
use tracing::instrument;

use ems_core::{AppError, ErrorResponse};
use ems_models::{LoginRequest, LoginResponse, SignupRequest, SignupResponse, User};

use crate::middleware::AuthUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::service::AuthService;

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/v1/user/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = SignupResponse),
        (status = 400, description = "Validation error, or email/username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
#[instrument(skip(state, dto))]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    let user_id = AuthService::signup(&state.db, dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".to_string(),
            user_id,
        }),
    ))
}

/// Log in and receive an access token
#[utoipa::path(
    post,
    path = "/api/v1/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Unknown email or wrong password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Accounts"
)]
#[instrument(skip(state, dto))]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let token = AuthService::login(&state.db, dto, &state.jwt_config).await?;
    Ok(Json(LoginResponse {
        message: "Login Successful".to_string(),
        token,
    }))
}

/// Get the caller's own account
#[utoipa::path(
    get,
    path = "/api/v1/user/profile",
    responses(
        (status = 200, description = "Account of the token holder", body = User),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Accounts"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(&state.db, auth_user.user_id()?).await?;
    Ok(Json(user))
}
