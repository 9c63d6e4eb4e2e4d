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
use tracing::{error, info};

/// Delete an item by id
pub async fn item_delete(State(store): State<Arc<ItemStore>>, Path(id): Path<i64>) -> Response {
    match store.delete_item(id).await {
        Ok(0) => (
            StatusCode::NOT_FOUND,
            Json(MessageResponse::new("Item not found")),
        )
            .into_response(),
        Ok(_) => {
            info!("Deleted item {}", id);
            (
                StatusCode::OK,
                Json(MessageResponse::new("Item deleted successfully")),
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to delete item {}: {}", id, e);
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
