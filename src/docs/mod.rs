use crate::models::*;
use utoipa::OpenApi;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_create_doc() {}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "All persisted items", body = [Item]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_list_doc() {}

/// Fetch a single item by id
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "The matching item", body = Item),
        (status = 404, description = "No item with this id", body = MessageResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_get_doc() {}

/// Overwrite all fields of an existing item
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated successfully", body = MessageResponse),
        (status = 404, description = "No item with this id", body = MessageResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_update_doc() {}

/// Delete an item by id
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item deleted successfully", body = MessageResponse),
        (status = 404, description = "No item with this id", body = MessageResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_delete_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        item_create_doc,
        item_list_doc,
        item_get_doc,
        item_update_doc,
        item_delete_doc,
    ),
    components(
        schemas(HealthResponse, Item, ItemPayload, MessageResponse, ErrorResponse)
    ),
    tags(
        (name = "items", description = "Item CRUD endpoints")
    )
)]
pub struct ApiDoc;
