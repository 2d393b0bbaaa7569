use axum::http::{HeaderValue, Method, header};
use axum::response::Html;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::middleware::{authenticate, authorize};
use crate::modules::auth::init_account_router;
use crate::modules::emp::init_emp_router;
use crate::modules::employees::init_employees_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

async fn welcome() -> Html<&'static str> {
    Html("<h1>Welcome to Employee Management System</h1>")
}

fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Builds the application.
///
/// Every API route passes through `authenticate` and then `authorize`, both
/// driven by the route policy table. Documentation routes are merged after
/// those layers and stay public.
pub fn init_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/", get(welcome))
        .nest(
            "/api/v1",
            Router::new()
                .nest("/user", init_account_router())
                .nest("/admin/users", init_users_router())
                .nest("/employees", init_employees_router())
                .nest("/emp", init_emp_router()),
        )
        // Route layers run bottom-up: metrics, authenticate, authorize, handler.
        .route_layer(middleware::from_fn(authorize))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .route_layer(middleware::from_fn(metrics_middleware));

    api.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .with_state(state.clone())
        .layer(cors_layer(&state))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
