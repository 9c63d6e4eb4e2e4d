use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response carrying a human-readable outcome message
///
/// Used for update/delete confirmations and not-found replies.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
