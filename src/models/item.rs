use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Item row as persisted in the `items` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image_url: String,
}

/// Request body for creating or updating an item
///
/// No field-level validation is applied here; whatever the client sends is
/// bound into the statement and the store enforces its own schema constraints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemPayload {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub image_url: String,
}

impl Item {
    /// Build the echo response for a freshly inserted payload
    pub fn from_payload(id: i64, payload: ItemPayload) -> Self {
        Self {
            id,
            name: payload.name,
            price: payload.price,
            description: payload.description,
            image_url: payload.image_url,
        }
    }
}
