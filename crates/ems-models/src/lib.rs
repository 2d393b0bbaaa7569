//! # EMS Models
//!
//! Domain models and DTOs for the EMS API.
//!
//! - [`ids`]: strongly-typed UUID identifiers
//! - [`users`]: user accounts, signup/login and admin DTOs
//! - [`employees`]: employee records and their create/update DTOs
//! - [`text`]: length and NUL checks for stored text
//!
//! Request DTOs carry their validation rules as `validator` attributes, so a
//! handler only sees input that already passed every field check.

pub mod employees;
pub mod ids;
pub mod text;
pub mod users;

pub use ids::{EmployeeId, UserId};

pub use users::{
    LoginRequest, LoginResponse, MessageResponse, SignupRequest, SignupResponse, UpdateUserDto,
    User, UserCredentials,
};

pub use employees::{
    CreateEmployeeDto, CreateEmployeeResponse, DeleteEmployeeQuery, Employee, EmployeePatch,
    NewEmployee, UpdateEmployeeDto,
};
