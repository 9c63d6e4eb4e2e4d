use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for a store or query failure, carrying the raw error text
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_wire_shape() {
        let body = ErrorResponse {
            error: "boom".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"error": "boom"})
        );
    }
}
