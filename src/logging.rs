use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use opentelemetry::{KeyValue, global, trace::TraceError};
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{
    Resource,
    propagation::TraceContextPropagator,
    runtime,
    trace::{RandomIdGenerator, Sampler, Tracer},
};
use opentelemetry_semantic_conventions::resource::{SERVICE_NAME, SERVICE_VERSION};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_DIR: &str = "storage/logs";

/// Logs one line when a request arrives and one when it completes, tagged
/// with a per-request id. Completion level follows the status class.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(request_id = %request_id, method = %method, path = %path, "Incoming request");

    let response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis() as u64;
    let status = response.status().as_u16();

    match status {
        400..=499 => warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "Client error"
        ),
        500..=599 => error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "Server error"
        ),
        _ => info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status,
            latency_ms,
            "Request completed"
        ),
    }

    response
}

fn init_tracer(otlp_endpoint: String) -> Result<Tracer, TraceError> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    let resource = Resource::new(vec![
        KeyValue::new(SERVICE_NAME, env!("CARGO_PKG_NAME")),
        KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")),
        KeyValue::new(
            "environment",
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        ),
    ]);

    let otlp_exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_endpoint(otlp_endpoint);

    opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(otlp_exporter)
        .with_trace_config(
            opentelemetry_sdk::trace::Config::default()
                .with_sampler(Sampler::AlwaysOn)
                .with_id_generator(RandomIdGenerator::default())
                .with_resource(resource),
        )
        .install_batch(runtime::Tokio)
}

/// Installs the global subscriber: compact console output, a daily error
/// log, a daily JSON log, and OTLP span export when
/// `OTEL_EXPORTER_OTLP_ENDPOINT` is set.
pub fn init_tracing() -> anyhow::Result<()> {
    let log_dir = std::env::var("LOG_DIR").unwrap_or_else(|_| DEFAULT_LOG_DIR.to_string());
    std::fs::create_dir_all(&log_dir)?;

    let console_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}=info,tower_http=warn,sqlx=warn",
            env!("CARGO_CRATE_NAME")
        ))
    });

    let console_layer = fmt::layer()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .with_filter(console_filter);

    let error_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "ems.log");
    let error_layer = fmt::layer()
        .with_writer(error_appender)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false)
        .with_filter(EnvFilter::new("error"));

    let json_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "ems.json");
    let json_layer = fmt::layer()
        .json()
        .with_writer(json_appender)
        .with_current_span(true)
        .with_span_list(true)
        .with_filter(EnvFilter::new("info"));

    let otel_layer = match std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT") {
        Ok(endpoint) => match init_tracer(endpoint) {
            Ok(tracer) => Some(tracing_opentelemetry::layer().with_tracer(tracer)),
            Err(e) => {
                eprintln!("Failed to initialize OpenTelemetry: {}. Continuing without it.", e);
                None
            }
        },
        Err(_) => None,
    };
    let otel_enabled = otel_layer.is_some();

    tracing_subscriber::registry()
        .with(console_layer)
        .with(error_layer)
        .with(json_layer)
        .with(otel_layer)
        .try_init()?;

    info!(log_dir = %log_dir, otel_enabled, "tracing initialized");
    Ok(())
}

pub async fn shutdown_tracer() {
    info!("Shutting down OpenTelemetry tracer...");
    global::shutdown_tracer_provider();
}
