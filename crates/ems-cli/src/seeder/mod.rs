//! Fake employee data for development databases.

mod employees;

pub use employees::{EmployeeSeed, clear_employees, generate_employees, seed_employees};
