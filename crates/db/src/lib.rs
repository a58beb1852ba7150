//! `db` crate — pure persistence layer.
//!
//! Provides a SQLite connection pool, the [`Record`] entity and the
//! [`RecordStore`] that owns the `records` table. No presentation logic
//! lives here.

pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use pool::DbPool;
pub use error::DbError;
pub use models::{Record, UpdateOutcome, DeleteOutcome};
pub use repository::records::RecordStore;

#[cfg(test)]
mod store_tests;
