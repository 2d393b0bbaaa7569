use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use ems_auth::Claims;
use ems_core::ErrorResponse;

use crate::middleware::AuthUser;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AckResponse {
    pub msg: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmpProfileResponse {
    pub msg: String,
    pub user: Claims,
}

/// Acknowledge an employee submission
///
/// Nothing is stored; the endpoint only confirms that the caller may add employees.
#[utoipa::path(
    post,
    path = "/api/v1/emp/add",
    responses(
        (status = 200, description = "Acknowledged", body = AckResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not admin or hr", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Self-service"
)]
#[instrument]
pub async fn add_employee_ack(auth_user: AuthUser) -> Json<AckResponse> {
    tracing::debug!(user_id = %auth_user.0.sub, "employee submission acknowledged");
    Json(AckResponse {
        msg: "Employee added successfully".to_string(),
    })
}

/// The identity carried by the caller's token
#[utoipa::path(
    get,
    path = "/api/v1/emp/profile",
    responses(
        (status = 200, description = "Token claims", body = EmpProfileResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Self-service"
)]
#[instrument]
pub async fn get_emp_profile(auth_user: AuthUser) -> Json<EmpProfileResponse> {
    Json(EmpProfileResponse {
        msg: "Employee profile data".to_string(),
        user: auth_user.0,
    })
}
