use crate::{
    db::ItemStore,
    models::{ErrorResponse, ItemPayload, MessageResponse},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{error, info};

/// Overwrite all fields of an existing item
pub async fn item_update(
    State(store): State<Arc<ItemStore>>,
    Path(id): Path<i64>,
    Json(payload): Json<ItemPayload>,
) -> Response {
    match store.update_item(id, &payload).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Item not found")),
        )
            .into_response(),
        Ok(_) => {
            info!("Updated item {}", id);
            (
                StatusCode::OK,
                Json(MessageResponse::new("Item updated successfully")),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to update item {}: {}", id, e);
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
