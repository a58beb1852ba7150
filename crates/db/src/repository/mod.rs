//! Repository types — one per database table.
//!
//! Every operation borrows a pooled connection for a single statement and
//! returns a `Result<T, DbError>`. No presentation logic — pure SQL.

pub mod records;
