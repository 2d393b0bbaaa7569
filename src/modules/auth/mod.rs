//! Signup, login and the caller's own profile.

pub mod controller;
pub mod router;
pub mod service;

pub use router::init_account_router;
