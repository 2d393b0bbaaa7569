//! Request pipeline: authenticate, then authorize against the route policy table.

pub mod auth;
pub mod policy;

pub use auth::{AuthUser, authenticate, extract_token};
pub use policy::{Access, ROUTE_POLICIES, RoutePolicy, access_for, authorize, check_access};
