use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;

use ems_core::{AppError, ErrorResponse};
use ems_models::{
    CreateEmployeeDto, CreateEmployeeResponse, DeleteEmployeeQuery, Employee, EmployeeId,
    EmployeePatch, MessageResponse, NewEmployee, UpdateEmployeeDto,
};

use crate::modules::employees::service::EmployeeService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

fn parse_employee_id(eid: Option<&str>) -> Result<EmployeeId, AppError> {
    eid.and_then(|eid| eid.trim().parse().ok())
        .ok_or_else(|| AppError::invalid_field("eid", "Valid employee ID is required."))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "All employees, newest first", body = Vec<Employee>),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
#[instrument(skip(state))]
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, AppError> {
    let employees = EmployeeService::list_employees(&state.db).await?;
    Ok(Json(employees))
}

/// Add an employee
#[utoipa::path(
    post,
    path = "/api/v1/employees/add",
    request_body = CreateEmployeeDto,
    responses(
        (status = 201, description = "Employee created", body = CreateEmployeeResponse),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not admin or hr", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
#[instrument(skip(state, dto))]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateEmployeeDto>,
) -> Result<(StatusCode, Json<CreateEmployeeResponse>), AppError> {
    let employee = NewEmployee::try_from(dto)?;
    let employee_id = EmployeeService::create_employee(&state.db, employee).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateEmployeeResponse {
            message: "Employee created successfully".to_string(),
            employee_id,
        }),
    ))
}

/// Get one employee
#[utoipa::path(
    get,
    path = "/api/v1/employees/{eid}",
    params(("eid" = String, Path, description = "Employee ID (UUID)")),
    responses(
        (status = 200, description = "The employee", body = Employee),
        (status = 400, description = "Malformed ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
#[instrument(skip(state))]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(eid): Path<String>,
) -> Result<Json<Employee>, AppError> {
    let employee = EmployeeService::get_employee(&state.db, parse_employee_id(Some(&eid))?).await?;
    Ok(Json(employee))
}

/// Update an employee
#[utoipa::path(
    put,
    path = "/api/v1/employees/{eid}",
    params(("eid" = String, Path, description = "Employee ID (UUID)")),
    request_body = UpdateEmployeeDto,
    responses(
        (status = 200, description = "Updated employee", body = Employee),
        (status = 400, description = "Malformed ID or validation error", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not admin or hr", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
#[instrument(skip(state, dto))]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(eid): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateEmployeeDto>,
) -> Result<Json<Employee>, AppError> {
    let id = parse_employee_id(Some(&eid))?;
    let patch = EmployeePatch::try_from(dto)?;
    let employee = EmployeeService::update_employee(&state.db, id, patch).await?;
    Ok(Json(employee))
}

/// Delete an employee
#[utoipa::path(
    delete,
    path = "/api/v1/employees/delete",
    params(DeleteEmployeeQuery),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse),
        (status = 400, description = "Missing or malformed ID", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not admin or hr", body = ErrorResponse),
        (status = 404, description = "Employee not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Employees"
)]
#[instrument(skip(state))]
pub async fn delete_employee(
    State(state): State<AppState>,
    Query(query): Query<DeleteEmployeeQuery>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_employee_id(query.eid.as_deref())?;
    EmployeeService::delete_employee(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Employee deleted successfully.")))
}
