use crate::{
    db::ItemStore,
    models::{ErrorResponse, Item, ItemPayload},
};
use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::{error, info};

/// Create a new item and echo it back with the id the store assigned
pub async fn item_create(
    State(store): State<Arc<ItemStore>>,
    Json(payload): Json<ItemPayload>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    match store.insert_item(&payload).await {
        Ok(id) => {
            info!("Created item {}", id);
            Ok((StatusCode::CREATED, Json(Item::from_payload(id, payload))))
        }
        Err(e) => {
            error!("Failed to create item: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}
