use std::sync::Arc;

use axum::{
    Json, Router,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
    routing::get,
};
use tracing::{debug, info};

use restapi_core::EntityId;
use restapi_infra::EntityStore;
use restapi_sales::Order;

use crate::app::dto::{self, RawId};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_orders).post(create_order).delete(delete_all_orders))
        .route("/:id", get(get_order).delete(delete_order))
}

pub async fn list_orders(Extension(services): Extension<Arc<AppServices>>) -> Response {
    dto::list_response(services.orders.find_all())
}

pub async fn get_order(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<RawId>, PathRejection>,
) -> Result<Json<Order>, ApiError> {
    let Path(id) = id?;
    id.entity_id()
        .and_then(|id| services.orders.find_by_id(id))
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Body is a JSON array of product ids; unknown and negative ids are dropped.
pub async fn create_order(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<Vec<RawId>>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(raw_ids) = body?;
    let product_ids: Vec<EntityId> = raw_ids.iter().filter_map(|id| id.entity_id()).collect();
    if product_ids.len() < raw_ids.len() {
        debug!(dropped = raw_ids.len() - product_ids.len(), "negative product ids dropped from order");
    }

    let order = services.orders.place(&product_ids, &services.products)?;
    info!(
        id = %order.id,
        products = order.products.len(),
        total = order.total_price(),
        "order placed"
    );
    Ok(dto::created(order))
}

pub async fn delete_order(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<RawId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    if let Some(id) = id.entity_id() {
        services.orders.delete_by_id(id);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all_orders(Extension(services): Extension<Arc<AppServices>>) -> StatusCode {
    services.orders.delete_all();
    StatusCode::NO_CONTENT
}
