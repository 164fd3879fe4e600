//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: repositories shared by every handler
//! - `routes/`: HTTP routes + handlers (one file per resource)
//! - `dto.rs`: query DTOs and response helpers
//! - `errors.rs`: mapping of failures to status codes

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use restapi_observability::HttpMetrics;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the black-box tests).
pub fn build_app(services: Arc<AppServices>, metrics: Arc<HttpMetrics>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/metrics", get(routes::system::metrics))
        .nest("/api", routes::router())
        // Route layer: runs after routing so the matched path template is known.
        .route_layer(axum::middleware::from_fn_with_state(
            metrics.clone(),
            middleware::track_http_metrics,
        ))
        .layer(Extension(services))
        .layer(Extension(metrics))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(CatchPanicLayer::custom(middleware::handle_panic)),
        )
}
