//! Typed error type for the db crate.

use thiserror::Error;

/// Failures surfaced by the record store.
///
/// "Not found" and "no rows affected" are never errors here; they are
/// reported through `Option` and the outcome enums in [`crate::models`].
#[derive(Debug, Error)]
pub enum DbError {
    /// The storage medium failed (connection, disk, corruption, busy).
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("invalid database url '{url}': {source}")]
    InvalidDatabaseUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
}
