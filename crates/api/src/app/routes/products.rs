use std::sync::Arc;

use axum::{
    Json, Router,
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Extension, Path},
    http::StatusCode,
    response::Response,
    routing::get,
};
use tracing::info;

use restapi_infra::EntityStore;
use restapi_products::{Product, ProductChanges};

use crate::app::dto::{self, RawId};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product).delete(delete_all_products))
        .route("/:id", get(get_product).put(update_product).delete(delete_product))
}

pub async fn list_products(Extension(services): Extension<Arc<AppServices>>) -> Response {
    dto::list_response(services.products.find_all())
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<RawId>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    id.entity_id()
        .and_then(|id| services.products.find_by_id(id))
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductChanges>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let product = services.products.create(body);
    info!(id = %product.id, name = %product.name, "product created");
    Ok(dto::created(product))
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<RawId>, PathRejection>,
    body: Result<Json<ProductChanges>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let id = id.entity_id().ok_or(ApiError::NotFound)?;
    Ok(Json(services.products.update(id, body)?))
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<RawId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    if let Some(id) = id.entity_id() {
        services.products.delete_by_id(id);
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Clears the catalog, seed products included. New products keep counting from the last id.
pub async fn delete_all_products(Extension(services): Extension<Arc<AppServices>>) -> StatusCode {
    services.products.delete_all();
    StatusCode::NO_CONTENT
}
