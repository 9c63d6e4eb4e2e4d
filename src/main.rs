mod config;
mod db;
mod docs;
mod handlers;
mod models;
mod routes;

use axum::Router;
use config::Config;
use db::ItemStore;
use docs::ApiDoc;
use routes::create_api_routes;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to info level, but allow debug for our app
            "item_management=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!("Starting server...");

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });

    // Build the shared store handle. The connection itself is opened lazily;
    // a failed ping is logged and the process keeps serving, so requests fail
    // at query time instead.
    let store = match ItemStore::connect(&config.db_url) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Invalid database URL: {}", e);
            std::process::exit(1);
        }
    };
    match store.ping().await {
        Ok(()) => info!("Connected to the database"),
        Err(e) => {
            error!("Database connection failed: {}", e);
            warn!("Continuing without a verified database connection");
        }
    }

    // Create API routes
    let api_routes = create_api_routes(store);

    // Combine all routes
    let app_routes = Router::new()
        .merge(api_routes)
        // Mount Swagger UI
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add tracing layer
        .layer(TraceLayer::new_for_http());

    // Start the HTTP server
    let listener = tokio::net::TcpListener::bind(config.server_address())
        .await
        .unwrap_or_else(|_| panic!("Failed to bind to {}", config.server_address()));

    info!("Server running on http://{}", config.server_address());
    info!(
        "Swagger UI available at http://{}/swagger",
        config.server_address()
    );

    axum::serve(listener, app_routes)
        .await
        .expect("Server failed to start");
}
