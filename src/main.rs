use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

mod models;
mod routes;
mod services;

use models::book::Book;
use routes::{
    books::{book_grid, get_book, list_categories},
    health::health_check,
};
use services::catalog::load_catalog;

type Catalog = Arc<Vec<Book>>;

fn app(catalog: Catalog) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/books", get(book_grid))
        .route("/books/:book_id", get(get_book))
        .route("/categories", get(list_categories))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(catalog)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("library_service=info,tower_http=info")
        .init();

    let catalog: Catalog = Arc::new(load_catalog());
    info!("Catalog loaded with {} books", catalog.len());

    let app = app(catalog);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "8050".to_string());
    let addr = format!("{}:{}", host, port);

    info!("Library service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
