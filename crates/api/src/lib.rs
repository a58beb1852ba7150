//! `api` crate — HTTP layer over the record store.
//!
//! Exposes:
//!   GET        /                  list all records
//!   GET|POST   /add               add form / create
//!   GET|POST   /edit/{id}         edit form / update
//!   GET        /delete/{id}       delete
//!   GET        /search?q=         filtered list
//!   GET        /about
//!   GET        /api/health        database connectivity
//!   GET        /api/records[?q=]  JSON listing
//!   GET        /api/records/{id}  JSON record

pub mod error;
pub mod handlers;
pub mod views;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use db::RecordStore;

pub use error::ApiError;
pub use handlers::AppState;

use handlers::{health, pages, records};

/// Build the application router around an explicitly supplied store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/add", get(pages::add_form).post(pages::add))
        .route("/edit/:id", get(pages::edit_form).post(pages::edit))
        .route("/delete/:id", get(pages::delete))
        .route("/search", get(pages::search))
        .route("/about", get(pages::about))
        .route("/api/health", get(health::health_check))
        .route("/api/records", get(records::list))
        .route("/api/records/:id", get(records::get))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `bind` and serve until Ctrl-C.
pub async fn serve(bind: &str, store: RecordStore) -> Result<(), ApiError> {
    let listener = TcpListener::bind(bind).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(AppState::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
