//! Employee records and their DTOs.
//!
//! Employees are independent of user accounts. Salary arrives either as a JSON
//! number or a numeric string, and the joining date as an ISO-8601 date or
//! date-time; both are normalised before they reach the database.

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use ems_core::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::text::validate_text;

use crate::ids::EmployeeId;

const SALARY_MESSAGE: &str = "Salary must be a number.";
const DATE_MESSAGE: &str = "Date of joining must be a valid date.";

#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateEmployeeDto {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "First name is required."),
        custom(function = "validate_text")
    )]
    #[schema(example = "Ada")]
    pub first_name: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Last name is required."),
        custom(function = "validate_text")
    )]
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[serde(default)]
    #[validate(
        email(message = "Valid email is required."),
        custom(function = "validate_text")
    )]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Position is required."),
        custom(function = "validate_text")
    )]
    #[schema(example = "Engineer")]
    pub position: String,
    /// A number, or a string holding one.
    #[serde(default)]
    #[validate(custom(function = "validate_salary"))]
    #[schema(value_type = f64, example = 85000)]
    pub salary: Value,
    /// `YYYY-MM-DD` or an RFC 3339 date-time.
    #[serde(default)]
    #[validate(custom(function = "validate_date"))]
    #[schema(example = "2024-01-15")]
    pub date_of_joining: String,
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Department is required."),
        custom(function = "validate_text")
    )]
    #[schema(example = "Research")]
    pub department: String,
}

/// Partial update. Absent fields keep their stored values; present ones
/// must be non-empty and well-formed.
#[derive(Deserialize, Debug, Clone, Default, Validate, ToSchema)]
pub struct UpdateEmployeeDto {
    #[validate(
        length(min = 1, message = "First name cannot be empty."),
        custom(function = "validate_text")
    )]
    pub first_name: Option<String>,
    #[validate(
        length(min = 1, message = "Last name cannot be empty."),
        custom(function = "validate_text")
    )]
    pub last_name: Option<String>,
    #[validate(
        email(message = "Valid email is required."),
        custom(function = "validate_text")
    )]
    pub email: Option<String>,
    #[validate(
        length(min = 1, message = "Position cannot be empty."),
        custom(function = "validate_text")
    )]
    pub position: Option<String>,
    #[validate(custom(function = "validate_salary"))]
    #[schema(value_type = Option<f64>)]
    pub salary: Option<Value>,
    #[validate(custom(function = "validate_date"))]
    pub date_of_joining: Option<String>,
    #[validate(
        length(min = 1, message = "Department cannot be empty."),
        custom(function = "validate_text")
    )]
    pub department: Option<String>,
}

/// A validated employee ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    pub department: String,
}

/// A validated partial update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub date_of_joining: Option<NaiveDate>,
    pub department: Option<String>,
}

impl TryFrom<CreateEmployeeDto> for NewEmployee {
    type Error = AppError;

    fn try_from(dto: CreateEmployeeDto) -> Result<Self, Self::Error> {
        let salary =
            parse_salary(&dto.salary).ok_or_else(|| AppError::invalid_field("salary", SALARY_MESSAGE))?;
        let date_of_joining = parse_date(&dto.date_of_joining)
            .ok_or_else(|| AppError::invalid_field("date_of_joining", DATE_MESSAGE))?;

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            position: dto.position,
            salary,
            date_of_joining,
            department: dto.department,
        })
    }
}

impl TryFrom<UpdateEmployeeDto> for EmployeePatch {
    type Error = AppError;

    fn try_from(dto: UpdateEmployeeDto) -> Result<Self, Self::Error> {
        let salary = dto
            .salary
            .as_ref()
            .map(|value| {
                parse_salary(value).ok_or_else(|| AppError::invalid_field("salary", SALARY_MESSAGE))
            })
            .transpose()?;
        let date_of_joining = dto
            .date_of_joining
            .as_deref()
            .map(|value| {
                parse_date(value)
                    .ok_or_else(|| AppError::invalid_field("date_of_joining", DATE_MESSAGE))
            })
            .transpose()?;

        Ok(Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            email: dto.email,
            position: dto.position,
            salary,
            date_of_joining,
            department: dto.department,
        })
    }
}

#[derive(Deserialize, Debug, Clone, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteEmployeeQuery {
    /// Employee ID (UUID)
    pub eid: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct CreateEmployeeResponse {
    pub message: String,
    pub employee_id: EmployeeId,
}

/// Accepts finite JSON numbers and strings that parse as one.
pub fn parse_salary(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let s = s.trim();
            // Rejects "inf", "NaN" and friends that f64 parsing would accept.
            if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || "+-.".contains(c)) {
                return None;
            }
            s.parse::<f64>().ok()
        }
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Accepts a calendar date or a date-time, keeping only the date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
        .or_else(|| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

fn validate_salary(value: &Value) -> Result<(), ValidationError> {
    match parse_salary(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("salary").with_message(Cow::Borrowed(SALARY_MESSAGE))),
    }
}

fn validate_date(value: &str) -> Result<(), ValidationError> {
    match parse_date(value) {
        Some(_) => Ok(()),
        None => Err(
            ValidationError::new("date_of_joining").with_message(Cow::Borrowed(DATE_MESSAGE))
        ),
    }
}
