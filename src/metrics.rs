//! Prometheus metrics.
//!
//! Recording is a no-op when `OBSERVABILITY_ENABLED` is `false` or `0`.

use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

const LATENCY_BUCKETS: &[f64] = &[
    0.001, 0.005, 0.01, 0.025, 0.05, 0.075, 0.1, 0.25, 0.5, 0.75, 1.0, 2.5, 5.0, 7.5, 10.0,
];

pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

/// Installs the global Prometheus recorder and spawns its upkeep task.
///
/// Returns `Ok(None)` when observability is disabled.
pub fn init_metrics() -> anyhow::Result<Option<PrometheusHandle>> {
    if !is_observability_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            LATENCY_BUCKETS,
        )?
        .install_recorder()?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_observability_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or_else(|| "unmatched".to_owned());

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Serves the exposition format on `/metrics`.
pub fn metrics_router<S>(handle: PrometheusHandle) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

pub fn track_user_created(role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("users_created_total", "role" => role.to_string()).increment(1);
}

pub fn track_user_login_success(role: &str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "role" => role.to_string(), "status" => "success").increment(1);
}

pub fn track_user_login_failure(reason: &'static str) {
    if !is_observability_enabled() {
        return;
    }
    counter!("user_logins_total", "role" => "unknown", "status" => "failure", "reason" => reason)
        .increment(1);
}

pub fn track_jwt_issued() {
    if !is_observability_enabled() {
        return;
    }
    counter!("jwt_tokens_issued_total").increment(1);
}

pub fn track_authorization_check(allowed: bool) {
    if !is_observability_enabled() {
        return;
    }
    let outcome = if allowed { "allowed" } else { "denied" };
    counter!("authorization_checks_total", "outcome" => outcome).increment(1);
}

pub fn track_employee_created() {
    if !is_observability_enabled() {
        return;
    }
    counter!("employees_created_total").increment(1);
}
