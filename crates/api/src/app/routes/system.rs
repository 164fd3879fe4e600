use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use restapi_observability::HttpMetrics;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Prometheus text exposition of the HTTP meters.
pub async fn metrics(Extension(metrics): Extension<Arc<HttpMetrics>>) -> Response {
    match metrics.encode() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "failed to encode metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
