use crate::{
    db::ItemStore,
    models::{ErrorResponse, Item},
};
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::error;

/// List every item in the store
pub async fn item_list(
    State(store): State<Arc<ItemStore>>,
) -> Result<(StatusCode, Json<Vec<Item>>), (StatusCode, Json<ErrorResponse>)> {
    match store.list_items().await {
        Ok(items) => Ok((StatusCode::OK, Json(items))),
        Err(e) => {
            error!("Failed to list items: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
