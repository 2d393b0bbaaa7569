use anyhow::{Context, anyhow};
use sqlx::PgPool;
use tracing::instrument;

use ems_core::AppError;
use ems_models::{Employee, EmployeeId, EmployeePatch, NewEmployee};

use crate::metrics::track_employee_created;

const EMPLOYEE_COLUMNS: &str = "id, first_name, last_name, email, position, salary, \
                                date_of_joining, department, created_at, updated_at";

fn employee_not_found() -> AppError {
    AppError::not_found(anyhow!("Employee not found"))
}

pub struct EmployeeService;

impl EmployeeService {
    /// All employees, newest first.
    #[instrument(skip(db))]
    pub async fn list_employees(db: &PgPool) -> Result<Vec<Employee>, AppError> {
        let employees = sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY created_at DESC"
        ))
        .fetch_all(db)
        .await
        .context("Error fetching employees")?;

        Ok(employees)
    }

    #[instrument(skip(db, employee), fields(email = %employee.email))]
    pub async fn create_employee(
        db: &PgPool,
        employee: NewEmployee,
    ) -> Result<EmployeeId, AppError> {
        let id = sqlx::query_scalar::<_, EmployeeId>(
            r#"INSERT INTO employees
                   (first_name, last_name, email, position, salary, date_of_joining, department)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id"#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .bind(&employee.position)
        .bind(employee.salary)
        .bind(employee.date_of_joining)
        .bind(&employee.department)
        .fetch_one(db)
        .await
        .context("Error creating employee")?;

        track_employee_created();
        tracing::info!(employee_id = %id, "employee created");

        Ok(id)
    }

    #[instrument(skip(db))]
    pub async fn get_employee(db: &PgPool, id: EmployeeId) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(&format!(
            "SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Error fetching employee details")?
        .ok_or_else(employee_not_found)
    }

    /// Overwrites only the fields present in `patch`.
    #[instrument(skip(db, patch))]
    pub async fn update_employee(
        db: &PgPool,
        id: EmployeeId,
        patch: EmployeePatch,
    ) -> Result<Employee, AppError> {
        sqlx::query_as::<_, Employee>(&format!(
            r#"UPDATE employees
               SET first_name = COALESCE($2, first_name),
                   last_name = COALESCE($3, last_name),
                   email = COALESCE($4, email),
                   position = COALESCE($5, position),
                   salary = COALESCE($6, salary),
                   date_of_joining = COALESCE($7, date_of_joining),
                   department = COALESCE($8, department),
                   updated_at = NOW()
               WHERE id = $1
               RETURNING {EMPLOYEE_COLUMNS}"#
        ))
        .bind(id)
        .bind(&patch.first_name)
        .bind(&patch.last_name)
        .bind(&patch.email)
        .bind(&patch.position)
        .bind(patch.salary)
        .bind(patch.date_of_joining)
        .bind(&patch.department)
        .fetch_optional(db)
        .await
        .context("Error updating employee details")?
        .ok_or_else(employee_not_found)
    }

    #[instrument(skip(db))]
    pub async fn delete_employee(db: &PgPool, id: EmployeeId) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .context("Error deleting employee")?;

        if result.rows_affected() == 0 {
            return Err(employee_not_found());
        }

        Ok(())
    }
}
