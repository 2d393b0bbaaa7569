use std::time::Instant;

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate, Utc};
use fake::Fake;
use fake::faker::company::en::Profession;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};

const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Finance",
    "Human Resources",
    "Marketing",
    "Operations",
    "Sales",
    "Support",
];

/// 7 bind parameters per row keeps each statement well under the protocol limit.
const BATCH_SIZE: usize = 1000;

#[derive(Debug, Clone)]
pub struct EmployeeSeed {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: String,
    pub salary: f64,
    pub date_of_joining: NaiveDate,
    pub department: String,
}

/// Generates `count` employees in parallel. Emails are unique within a run.
pub fn generate_employees(count: usize) -> Vec<EmployeeSeed> {
    let today = Utc::now().date_naive();

    (0..count)
        .into_par_iter()
        .map(|idx| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email = format!(
                "{}.{}+emp{}@example.com",
                first_name.to_lowercase(),
                last_name.to_lowercase(),
                idx
            );
            let days_ago: u64 = (0..3650).fake();
            let department = DEPARTMENTS[(0..DEPARTMENTS.len()).fake::<usize>()];

            EmployeeSeed {
                first_name,
                last_name,
                email,
                position: Profession().fake(),
                salary: (30_000..200_000).fake::<u32>() as f64,
                date_of_joining: today.checked_sub_days(Days::new(days_ago)).unwrap_or(today),
                department: department.to_string(),
            }
        })
        .collect()
}

/// Generates and inserts `count` employees in one transaction.
pub async fn seed_employees(db: &PgPool, count: usize) -> Result<usize> {
    let start_time = Instant::now();
    println!("Seeding {} employees...", count);

    let employees = generate_employees(count);

    let mut tx = db.begin().await?;
    let mut inserted = 0;
    for chunk in employees.chunks(BATCH_SIZE) {
        inserted += insert_employees_chunk(&mut tx, chunk).await?;
    }
    tx.commit().await?;

    println!(
        "   Inserted {} employees in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

async fn insert_employees_chunk(
    tx: &mut Transaction<'_, Postgres>,
    employees: &[EmployeeSeed],
) -> Result<usize> {
    if employees.is_empty() {
        return Ok(0);
    }

    let mut query = String::from(
        "INSERT INTO employees (first_name, last_name, email, position, salary, date_of_joining, department) VALUES ",
    );

    for i in 0..employees.len() {
        if i > 0 {
            query.push_str(", ");
        }
        let p = i * 7;
        query.push_str(&format!(
            "(${}, ${}, ${}, ${}, ${}, ${}, ${})",
            p + 1,
            p + 2,
            p + 3,
            p + 4,
            p + 5,
            p + 6,
            p + 7
        ));
    }

    let mut q = sqlx::query(&query);
    for employee in employees {
        q = q
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(&employee.email)
            .bind(&employee.position)
            .bind(employee.salary)
            .bind(employee.date_of_joining)
            .bind(&employee.department);
    }

    let result = q
        .execute(&mut **tx)
        .await
        .context("Failed to insert employees")?;

    Ok(result.rows_affected() as usize)
}

/// Deletes every employee row. Returns how many were removed.
pub async fn clear_employees(db: &PgPool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM employees")
        .execute(db)
        .await
        .context("Failed to clear employees")?;

    Ok(result.rows_affected())
}
