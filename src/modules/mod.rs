pub mod auth;
pub mod emp;
pub mod employees;
pub mod users;
