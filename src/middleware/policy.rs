//! Declarative route policy.
//!
//! Every API route is listed once in [`ROUTE_POLICIES`] with the access rule
//! it requires. One generic middleware, [`authorize`], looks the matched
//! route up and applies the rule. Routes missing from the table require an
//! authenticated caller.

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};

use ems_auth::Claims;
use ems_core::{AppError, Role};

use crate::metrics::track_authorization_check;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Roles(&'static [Role]),
}

#[derive(Debug, Clone, Copy)]
pub struct RoutePolicy {
    pub method: &'static str,
    /// Route pattern as registered on the router, e.g. `/api/v1/employees/{eid}`.
    pub path: &'static str,
    pub access: Access,
}

const ADMIN: &[Role] = &[Role::Admin];
const ADMIN_HR: &[Role] = &[Role::Admin, Role::Hr];

const fn policy(method: &'static str, path: &'static str, access: Access) -> RoutePolicy {
    RoutePolicy {
        method,
        path,
        access,
    }
}

pub static ROUTE_POLICIES: &[RoutePolicy] = &[
    policy("GET", "/", Access::Public),
    // Accounts
    policy("POST", "/api/v1/user/signup", Access::Public),
    policy("POST", "/api/v1/user/login", Access::Public),
    policy("GET", "/api/v1/user/profile", Access::Authenticated),
    // User administration
    policy("GET", "/api/v1/admin/users", Access::Roles(ADMIN)),
    policy("GET", "/api/v1/admin/users/{id}", Access::Roles(ADMIN)),
    policy("PUT", "/api/v1/admin/users/{id}", Access::Roles(ADMIN)),
    policy("DELETE", "/api/v1/admin/users/{id}", Access::Roles(ADMIN)),
    // Employees
    policy("GET", "/api/v1/employees", Access::Authenticated),
    policy("POST", "/api/v1/employees/add", Access::Roles(ADMIN_HR)),
    policy("GET", "/api/v1/employees/{eid}", Access::Authenticated),
    policy("PUT", "/api/v1/employees/{eid}", Access::Roles(ADMIN_HR)),
    policy("DELETE", "/api/v1/employees/delete", Access::Roles(ADMIN_HR)),
    // Self-service
    policy("POST", "/api/v1/emp/add", Access::Roles(ADMIN_HR)),
    policy("GET", "/api/v1/emp/profile", Access::Authenticated),
];

/// Looks up the rule for a method and route pattern.
pub fn access_for(method: &str, path: &str) -> Access {
    ROUTE_POLICIES
        .iter()
        .find(|p| p.method.eq_ignore_ascii_case(method) && p.path == path)
        .map(|p| p.access)
        .unwrap_or(Access::Authenticated)
}

/// Rule for the route a request matched.
pub(crate) fn route_access(req: &Request) -> Access {
    match req.extensions().get::<MatchedPath>() {
        Some(path) => access_for(req.method().as_str(), path.as_str()),
        None => Access::Authenticated,
    }
}

/// Applies an access rule to the identity (if any) attached to a request.
pub fn check_access(access: Access, claims: Option<&Claims>) -> Result<(), AppError> {
    match access {
        Access::Public => Ok(()),
        Access::Authenticated => claims
            .map(|_| ())
            .ok_or_else(|| AppError::unauthorized("User not authenticated")),
        Access::Roles(allowed) => {
            let claims = claims.ok_or_else(|| AppError::unauthorized("User not authenticated"))?;
            if allowed.contains(&claims.role) {
                Ok(())
            } else {
                Err(AppError::forbidden("Access denied"))
            }
        }
    }
}

/// Rejects requests whose identity does not satisfy the matched route's rule.
pub async fn authorize(req: Request, next: Next) -> Result<Response, AppError> {
    let access = route_access(&req);
    let result = check_access(access, req.extensions().get::<Claims>());

    if let Access::Roles(_) = access {
        track_authorization_check(result.is_ok());
    }

    if let Err(err) = result {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            reason = %err.message(),
            "authorization denied"
        );
        return Err(err);
    }

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_no_duplicate_entries() {
        for (i, a) in ROUTE_POLICIES.iter().enumerate() {
            for b in &ROUTE_POLICIES[i + 1..] {
                assert!(
                    !(a.method == b.method && a.path == b.path),
                    "duplicate policy for {} {}",
                    a.method,
                    a.path
                );
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(access_for("POST", "/api/v1/user/login"), Access::Public);
        assert_eq!(
            access_for("post", "/api/v1/employees/add"),
            Access::Roles(ADMIN_HR)
        );
        assert_eq!(
            access_for("GET", "/api/v1/employees/{eid}"),
            Access::Authenticated
        );
    }

    #[test]
    fn test_unlisted_route_requires_authentication() {
        assert_eq!(
            access_for("PATCH", "/api/v1/employees/{eid}"),
            Access::Authenticated
        );
        assert_eq!(access_for("GET", "/not/listed"), Access::Authenticated);
    }
}
