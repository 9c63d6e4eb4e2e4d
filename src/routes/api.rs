use crate::db::ItemStore;
use crate::handlers::{
    health_check, item_create, item_delete, item_get, item_list, item_update, ready_check,
};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(store: Arc<ItemStore>) -> Router {
    Router::new()
        .route("/items", post(item_create).get(item_list))
        .route(
            "/items/:id",
            get(item_get).put(item_update).delete(item_delete),
        )
        .route("/health", get(health_check))
        .route("/ready", get(ready_check))
        .with_state(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    fn test_app() -> Router {
        // connect_lazy opens no connection until a statement runs, so the
        // routing-level tests below never touch a real store.
        let store = ItemStore::connect("mysql://root@localhost:3306/item_management")
            .expect("valid test url");
        create_api_routes(Arc::new(store))
    }

    async fn body_json(body: Body) -> serde_json::Value {
        let bytes = to_bytes(body, usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_probe_reports_ok() {
        let response = test_app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response.into_body()).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = test_app()
            .oneshot(Request::get("/widgets").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unsupported_method_is_405() {
        let response = test_app()
            .oneshot(
                Request::patch("/items/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected_by_extractor() {
        let response = test_app()
            .oneshot(Request::get("/items/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // Full request/response flow against a live store; runs only when
    // TEST_DB_URL points at a MySQL instance with the item_management schema.
    #[tokio::test]
    async fn crud_flow_over_http() {
        let Some(url) = std::env::var("TEST_DB_URL").ok() else {
            return;
        };
        let store = ItemStore::connect(&url).unwrap();
        let app = create_api_routes(Arc::new(store));

        let payload = serde_json::json!({
            "name": "Widget",
            "price": 9.99,
            "description": "A widget",
            "image_url": "http://x/w.png"
        });

        let response = app
            .clone()
            .oneshot(
                Request::post("/items")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response.into_body()).await;
        assert_eq!(created["name"], "Widget");
        assert_eq!(created["price"], 9.99);
        let id = created["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::get(format!("/items/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response.into_body()).await, created);

        let response = app
            .clone()
            .oneshot(
                Request::delete(format!("/items/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response.into_body()).await,
            serde_json::json!({"message": "Item deleted successfully"})
        );

        let response = app
            .clone()
            .oneshot(
                Request::get(format!("/items/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response.into_body()).await,
            serde_json::json!({"message": "Item not found"})
        );
    }
}
