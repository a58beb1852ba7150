//! Route handlers.
//!
//! - `pages`   — server-rendered HTML for browsing and editing records.
//! - `records` — read-only JSON view of the same data.
//! - `health`  — database connectivity probe.

pub mod health;
pub mod pages;
pub mod records;

use db::RecordStore;

/// Shared state injected into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: RecordStore,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self { store }
    }
}

/// `?q=` query string shared by the HTML and JSON listings.
#[derive(Debug, Default, serde::Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Blank queries list everything; anything else is a trimmed substring search.
pub(crate) async fn list_or_search(
    store: &RecordStore,
    query: &str,
) -> Result<Vec<db::Record>, db::DbError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        store.list_all().await
    } else {
        store.search(trimmed).await
    }
}
