use axum::Router;

pub mod orders;
pub mod products;
pub mod system;
pub mod tutorials;

/// Router for every resource under `/api`.
pub fn router() -> Router {
    Router::new()
        .nest("/tutorials", tutorials::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
}
