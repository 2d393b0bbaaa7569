//! Self-service endpoints that echo the caller's token identity.

pub mod controller;
pub mod router;

pub use router::init_emp_router;
