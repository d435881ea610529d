//! Jobly application composition root
//!
//! Composes all domain routers into a single application.

use axum::http::HeaderValue;
use axum::Router;
use jobly_auth::AuthBackend;
use jobly_jobs::{JobsRepositories, JobsState};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes
pub fn create_app(pool: PgPool, auth: AuthBackend) -> Router {
    let jobs_state = JobsState {
        repos: JobsRepositories::new(pool),
        auth,
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { concat!("Jobly API v", env!("CARGO_PKG_VERSION")) }),
        )
        .merge(jobly_jobs::routes().with_state(jobs_state))
}

/// Wrap `app` in the serving stack: request tracing, body limit, then CORS.
///
/// The body limit sits outside CORS so CORS wraps the router's own body type.
pub fn with_middleware(app: Router, cors_origins: Option<&str>) -> Router {
    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(body_limit_layer())
            .layer(build_cors_layer(cors_origins)),
    )
}

/// CORS layer for a comma-separated origin list; permissive when unset
pub fn build_cors_layer(origins: Option<&str>) -> CorsLayer {
    let Some(origins) = origins else {
        return CorsLayer::permissive();
    };

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}

/// Reject request bodies above `MAX_BODY_BYTES`
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
