//! # EMS CLI
//!
//! Administrative tasks that have no HTTP surface: bootstrapping the first
//! admin account and filling the employees table with fake data.
//!
//! ```ignore
//! use ems_cli::seeder::seed_employees;
//!
//! let inserted = seed_employees(&pool, 500).await?;
//! ```

pub mod admin;
pub mod seeder;
