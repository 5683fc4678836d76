pub mod blog;
pub mod catalog;
pub mod contact;
pub mod query;
pub mod read_time;
pub mod slug;
pub mod validation;

use crate::error::{is_unique_violation, FolioError, FolioResult};
use chrono::SecondsFormat;
use rusqlite::Connection;

/// Record timestamp: RFC 3339, UTC, fixed millisecond width so that string
/// order matches time order.
pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// True when another record in `table` already holds `slug`.
pub(crate) fn slug_taken(
    conn: &Connection,
    table: &str,
    slug: &str,
    exclude_id: Option<&str>,
) -> FolioResult<bool> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE slug = ?1 AND id != ?2)",
        table
    );
    let taken: bool = conn.query_row(&sql, (slug, exclude_id.unwrap_or("")), |row| row.get(0))?;
    Ok(taken)
}

/// Maps a failed write, turning a UNIQUE violation on the slug into
/// `DuplicateSlug` with the given message.
pub(crate) fn slug_write_error(err: rusqlite::Error, duplicate_msg: &str) -> FolioError {
    if is_unique_violation(&err) {
        FolioError::duplicate_slug(duplicate_msg)
    } else {
        err.into()
    }
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> FolioResult<String> {
    Ok(serde_json::to_string(value)?)
}
