use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use ems_auth::Claims;
use ems_core::{ErrorResponse, FieldError, Role};
use ems_models::{
    CreateEmployeeDto, CreateEmployeeResponse, Employee, LoginRequest, LoginResponse,
    MessageResponse, SignupRequest, SignupResponse, UpdateEmployeeDto, UpdateUserDto, User,
};

use crate::modules::emp::controller::{AckResponse, EmpProfileResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::signup,
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::get_profile,
        crate::modules::users::controller::list_users,
        crate::modules::users::controller::get_user,
        crate::modules::users::controller::update_user,
        crate::modules::users::controller::delete_user,
        crate::modules::employees::controller::list_employees,
        crate::modules::employees::controller::create_employee,
        crate::modules::employees::controller::get_employee,
        crate::modules::employees::controller::update_employee,
        crate::modules::employees::controller::delete_employee,
        crate::modules::emp::controller::add_employee_ack,
        crate::modules::emp::controller::get_emp_profile,
    ),
    components(
        schemas(
            User,
            Role,
            SignupRequest,
            SignupResponse,
            LoginRequest,
            LoginResponse,
            UpdateUserDto,
            MessageResponse,
            Employee,
            CreateEmployeeDto,
            UpdateEmployeeDto,
            CreateEmployeeResponse,
            Claims,
            AckResponse,
            EmpProfileResponse,
            ErrorResponse,
            FieldError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Accounts", description = "Signup, login and own profile"),
        (name = "User Administration", description = "Admin-only account management"),
        (name = "Employees", description = "Employee records"),
        (name = "Self-service", description = "Token identity endpoints")
    ),
    info(
        title = "Employee Management API",
        version = "0.1.0",
        description = "Employee management REST API built with Rust, Axum, and PostgreSQL, secured with JWT bearer tokens and role-based access control.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
