//! Row structs that map 1-to-1 onto database tables, plus the typed
//! outcomes of store mutations.
//!
//! These are *persistence* models — they carry no behaviour beyond
//! construction helpers.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// records
// ---------------------------------------------------------------------------

/// One catalogued item.
///
/// `id` is `None` until the store persists the record; afterwards it is
/// unique and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Record {
    pub id: Option<i64>,
    pub name: String,
    pub value: f64,
    pub category: String,
    pub description: Option<String>,
}

impl Record {
    /// Build a transient (never persisted) record.
    pub fn new(
        name: impl Into<String>,
        value: f64,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            value,
            category: category.into(),
            description: Some(description.into()),
        }
    }

    /// Same field values, addressed at the persisted row `id`.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Description as text, treating a NULL column as empty.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// mutation outcomes
// ---------------------------------------------------------------------------

/// Result of [`crate::RecordStore::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Exactly one row matched and was replaced.
    Updated,
    /// No row carries the given id.
    NoSuchId,
    /// The record had no id; nothing was executed.
    MissingId,
}

impl UpdateOutcome {
    pub fn is_updated(self) -> bool {
        matches!(self, Self::Updated)
    }
}

/// Result of [`crate::RecordStore::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NoSuchId,
}

impl DeleteOutcome {
    pub fn is_deleted(self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl std::fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Updated   => write!(f, "updated"),
            Self::NoSuchId  => write!(f, "no_such_id"),
            Self::MissingId => write!(f, "missing_id"),
        }
    }
}

impl std::fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deleted  => write!(f, "deleted"),
            Self::NoSuchId => write!(f, "no_such_id"),
        }
    }
}
