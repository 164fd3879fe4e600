use std::any::Any;
use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;

use restapi_observability::HttpMetrics;

/// Record one count and one latency sample per routed request.
///
/// The `uri` label is the route template (`/api/tutorials/:id`), not the raw path.
pub async fn track_http_metrics(
    State(metrics): State<Arc<HttpMetrics>>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let method = req.method().to_string();
    let uri = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| "UNKNOWN".to_string());

    let started = Instant::now();
    let response = next.run(req).await;
    metrics.observe(&method, &uri, response.status().as_u16(), started.elapsed());

    response
}

/// Turn a handler panic into a bare `500`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    error!(panic = detail, "request handler panicked");

    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;
    use tower_http::catch_panic::CatchPanicLayer;

    async fn boom() -> StatusCode {
        panic!("boom")
    }

    fn app(metrics: Arc<HttpMetrics>) -> Router {
        Router::new()
            .route("/items/:id", get(|| async { StatusCode::OK }))
            .route("/boom", get(boom))
            .route_layer(axum::middleware::from_fn_with_state(metrics, track_http_metrics))
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    #[tokio::test]
    async fn panics_become_empty_500() {
        let metrics = Arc::new(HttpMetrics::new().unwrap());

        let response = app(metrics)
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn requests_are_labelled_with_route_template() {
        let metrics = Arc::new(HttpMetrics::new().unwrap());

        let response = app(metrics.clone())
            .oneshot(Request::get("/items/42").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let text = metrics.encode().unwrap();
        assert!(text.contains(r#"uri="/items/:id""#));
        assert!(!text.contains("/items/42"));
    }
}
