use crate::{
    db::ItemStore,
    models::{ErrorResponse, MessageResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::error;

/// Fetch a single item by id
pub async fn item_get(State(store): State<Arc<ItemStore>>, Path(id): Path<i64>) -> Response {
    match store.get_item(id).await {
        Ok(Some(item)) => (StatusCode::OK, Json(item)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Item not found")),
        )
            .into_response(),
        Err(e) => {
            error!("Failed to fetch item {}: {}", id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
