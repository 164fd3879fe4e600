use std::sync::Arc;

use axum::{
    Json, Router,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Response,
    routing::get,
};
use tracing::info;

use restapi_infra::EntityStore;
use restapi_tutorials::{Tutorial, TutorialChanges};

use crate::app::dto::{self, RawId};
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_tutorials).post(create_tutorial).delete(delete_all_tutorials))
        .route("/published", get(find_by_published))
        .route(
            "/:id",
            get(get_tutorial).put(update_tutorial).delete(delete_tutorial),
        )
}

pub async fn list_tutorials(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::TitleQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    let tutorials = match query.title.as_deref() {
        Some(title) => services.tutorials.find_by_title_containing(title),
        None => services.tutorials.find_all(),
    };
    Ok(dto::list_response(tutorials))
}

pub async fn find_by_published(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::PublishedQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query?;
    Ok(dto::list_response(services.tutorials.find_by_published(query.published)))
}

pub async fn get_tutorial(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<RawId>, PathRejection>,
) -> Result<Json<Tutorial>, ApiError> {
    let Path(id) = id?;
    id.entity_id()
        .and_then(|id| services.tutorials.find_by_id(id))
        .map(Json)
        .ok_or(ApiError::NotFound)
}

pub async fn create_tutorial(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<TutorialChanges>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let tutorial = services.tutorials.create(body);
    info!(id = %tutorial.id, "tutorial created");
    Ok(dto::created(tutorial))
}

pub async fn update_tutorial(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<RawId>, PathRejection>,
    body: Result<Json<TutorialChanges>, JsonRejection>,
) -> Result<Json<Tutorial>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let id = id.entity_id().ok_or(ApiError::NotFound)?;
    Ok(Json(services.tutorials.update(id, body)?))
}

pub async fn delete_tutorial(
    Extension(services): Extension<Arc<AppServices>>,
    id: Result<Path<RawId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    if let Some(id) = id.entity_id() {
        services.tutorials.delete_by_id(id);
    }
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all_tutorials(Extension(services): Extension<Arc<AppServices>>) -> StatusCode {
    services.tutorials.delete_all();
    StatusCode::NO_CONTENT
}
