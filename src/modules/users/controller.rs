use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use ems_core::{AppError, ErrorResponse};
use ems_models::{MessageResponse, UpdateUserDto, User, UserId};

use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    id.parse()
        .map_err(|_| AppError::invalid_field("id", "Invalid User ID"))
}

/// List all accounts
#[utoipa::path(
    get,
    path = "/api/v1/admin/users",
    responses(
        (status = 200, description = "All accounts", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "User Administration"
)]
#[instrument(skip(state))]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::list_users(&state.db).await?;
    Ok(Json(users))
}

/// Get one account
#[utoipa::path(
    get,
    path = "/api/v1/admin/users/{id}",
    params(("id" = String, Path, description = "User ID (UUID)")),
    responses(
        (status = 200, description = "The account", body = User),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "No such account", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "User Administration"
)]
#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, AppError> {
    let user = UserService::get_user(&state.db, parse_user_id(&id)?).await?;
    Ok(Json(user))
}

/// Update an account
#[utoipa::path(
    put,
    path = "/api/v1/admin/users/{id}",
    params(("id" = String, Path, description = "User ID (UUID)")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated account", body = User),
        (status = 400, description = "Malformed ID, validation error, or duplicate email/username", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "No such account", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "User Administration"
)]
#[instrument(skip(state, dto))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateUserDto>,
) -> Result<Json<User>, AppError> {
    let user = UserService::update_user(&state.db, parse_user_id(&id)?, dto).await?;
    Ok(Json(user))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/api/v1/admin/users/{id}",
    params(("id" = String, Path, description = "User ID (UUID)")),
    responses(
        (status = 200, description = "Account deleted", body = MessageResponse),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not an admin", body = ErrorResponse),
        (status = 404, description = "No such account", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "User Administration"
)]
#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    UserService::delete_user(&state.db, parse_user_id(&id)?).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
