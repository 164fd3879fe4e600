use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use restapi_core::EntityId;

// -------------------------
// Ids
// -------------------------

/// An id as it arrives in a path segment or request body: any signed 64-bit integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawId(pub i64);

impl RawId {
    /// The stored-entity id this names, or `None` for values no entity can have.
    pub fn entity_id(self) -> Option<EntityId> {
        EntityId::try_from(self.0).ok()
    }
}

// -------------------------
// Query DTOs
// -------------------------

/// `?title=` filter for tutorial listings.
#[derive(Debug, Default, Deserialize)]
pub struct TitleQuery {
    pub title: Option<String>,
}

/// `?published=` filter; absent means `true`.
#[derive(Debug, Deserialize)]
pub struct PublishedQuery {
    #[serde(default = "default_published")]
    pub published: bool,
}

fn default_published() -> bool {
    true
}

impl Default for PublishedQuery {
    fn default() -> Self {
        Self {
            published: default_published(),
        }
    }
}

// -------------------------
// Response helpers
// -------------------------

/// `200` with the JSON array, or `204` with no body when the list is empty.
pub fn list_response<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::OK, Json(items)).into_response()
    }
}

/// `201` with the stored entity as JSON.
pub fn created<T: Serialize>(entity: T) -> Response {
    (StatusCode::CREATED, Json(entity)).into_response()
}
