//! Record CRUD and substring search.

use tracing::{debug, info, instrument};

use crate::{
    DbError, DbPool,
    models::{DeleteOutcome, Record, UpdateOutcome},
    pool::{create_pool, IN_MEMORY_URL},
};

/// Idempotent DDL for the single `records` table.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the id of a deleted row.
const CREATE_RECORDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS records (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    value       REAL NOT NULL,
    category    TEXT NOT NULL,
    description TEXT
)
"#;

const SELECT_COLUMNS: &str = "SELECT id, name, value, category, description FROM records";

/// Durable storage of [`Record`] values in the `records` table.
///
/// Cloning is cheap and shares the underlying pool; the store is meant to be
/// handed to consumers explicitly rather than kept in a global.
#[derive(Debug, Clone)]
pub struct RecordStore {
    pool: DbPool,
}

impl RecordStore {
    /// Connect to `database_url` and make sure the `records` table exists.
    pub async fn open(database_url: &str, max_connections: u32) -> Result<Self, DbError> {
        let pool = create_pool(database_url, max_connections).await?;
        Self::from_pool(pool).await
    }

    /// A fresh private in-memory store.
    pub async fn open_in_memory() -> Result<Self, DbError> {
        Self::open(IN_MEMORY_URL, 1).await
    }

    /// Wrap an existing pool, ensuring the schema first.
    pub async fn from_pool(pool: DbPool) -> Result<Self, DbError> {
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the `records` table if it does not exist yet.
    ///
    /// Safe to call repeatedly; an existing table is left untouched.
    pub async fn ensure_schema(&self) -> Result<(), DbError> {
        info!("Ensuring records schema");
        sqlx::query(CREATE_RECORDS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new record and return its assigned primary key.
    ///
    /// Any `id` already present on `record` is ignored.
    #[instrument(skip(self, record), fields(name = %record.name))]
    pub async fn create(&self, record: &Record) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"
            INSERT INTO records (name, value, category, description)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&record.name)
        .bind(record.value)
        .bind(&record.category)
        .bind(&record.description)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "record created");
        Ok(id)
    }

    /// Return every stored record, ordered by id.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<Record>, DbError> {
        let rows = sqlx::query_as::<_, Record>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    /// Fetch a single record by its primary key. `None` when absent.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Record>, DbError> {
        let row = sqlx::query_as::<_, Record>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    /// Replace every field of the row addressed by `record.id`.
    ///
    /// A record without an id is rejected as [`UpdateOutcome::MissingId`]
    /// before any statement runs.
    #[instrument(skip(self, record), fields(id = ?record.id))]
    pub async fn update(&self, record: &Record) -> Result<UpdateOutcome, DbError> {
        let Some(id) = record.id else {
            return Ok(UpdateOutcome::MissingId);
        };

        let result = sqlx::query(
            r#"
            UPDATE records
            SET name = ?, value = ?, category = ?, description = ?
            WHERE id = ?
            "#,
        )
        .bind(&record.name)
        .bind(record.value)
        .bind(&record.category)
        .bind(&record.description)
        .bind(id)
        .execute(&self.pool)
        .await?;

        let outcome = if result.rows_affected() == 1 {
            UpdateOutcome::Updated
        } else {
            UpdateOutcome::NoSuchId
        };
        debug!(%outcome, "record update finished");
        Ok(outcome)
    }

    /// Permanently delete a record. Deleting a missing id is not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, DbError> {
        let result = sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let outcome = if result.rows_affected() > 0 {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NoSuchId
        };
        debug!(%outcome, "record delete finished");
        Ok(outcome)
    }

    /// Records whose name, description or category contains `query`.
    ///
    /// Matching uses SQLite `LIKE` (ASCII case-insensitive). `%`, `_` and `\`
    /// inside `query` match themselves, not as wildcards.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Result<Vec<Record>, DbError> {
        let pattern = contains_pattern(query);

        let rows = sqlx::query_as::<_, Record>(&format!(
            r#"{SELECT_COLUMNS}
            WHERE name LIKE ? ESCAPE '\'
               OR description LIKE ? ESCAPE '\'
               OR category LIKE ? ESCAPE '\'
            ORDER BY id"#
        ))
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(hits = rows.len(), "search finished");
        Ok(rows)
    }

    /// Number of stored records.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM records")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Close the pool, waiting for checked-out connections to return.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// `%query%` with LIKE metacharacters escaped by `\`.
fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}
