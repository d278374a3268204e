//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types,
//! testable in isolation without database access.

use chrono::{DateTime, Utc};
use rusqlite::Row;
use uuid::Uuid;

use playbill_core::catalog::Content;
use playbill_core::storage::RepositoryError;

/// Convert a SQLite row to a Content.
///
/// Expected columns: id, title, subtitle, description, image_url,
/// duration, start_time, end_time, genres
pub fn row_to_content(row: &Row) -> rusqlite::Result<Content> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let subtitle: String = row.get(2)?;
    let description: String = row.get(3)?;
    let image_url: String = row.get(4)?;
    let duration: u32 = row.get(5)?;
    let start_time: String = row.get(6)?;
    let end_time: String = row.get(7)?;
    let genres_json: String = row.get(8)?;

    Ok(Content {
        id: parse_uuid(&id, 0)?,
        title,
        subtitle,
        description,
        image_url,
        duration,
        start_time: parse_datetime(&start_time, 6)?,
        end_time: parse_datetime(&end_time, 7)?,
        genres: parse_genres(&genres_json, 8)?,
    })
}

/// Serialize a genre list for the genres text column.
pub fn genres_to_json(genres: &[String]) -> Result<String, RepositoryError> {
    serde_json::to_string(genres).map_err(|e| RepositoryError::Serialization(e.to_string()))
}

/// Format a timestamp for a text column (RFC 3339).
pub fn format_datetime(datetime: &DateTime<Utc>) -> String {
    datetime.to_rfc3339()
}

fn parse_uuid(s: &str, column: usize) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| conversion_error(column, e))
}

fn parse_datetime(s: &str, column: usize) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

fn parse_genres(s: &str, column: usize) -> rusqlite::Result<Vec<String>> {
    serde_json::from_str(s).map_err(|e| conversion_error(column, e))
}

fn conversion_error(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(err))
}
