//! SQLite schema definitions and SQL query constants.
//!
//! All SQL statements used by the SQLite repository live here as pure
//! data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- Contents table. Genres are stored as a JSON array in a text column,
-- preserving order and duplicates.
CREATE TABLE IF NOT EXISTS contents (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    subtitle TEXT NOT NULL,
    description TEXT NOT NULL,
    image_url TEXT NOT NULL,
    duration INTEGER NOT NULL,
    start_time TEXT NOT NULL,
    end_time TEXT NOT NULL,
    genres TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_contents_title ON contents(title);
"#;

pub const INSERT_CONTENT: &str = r#"
INSERT INTO contents (id, title, subtitle, description, image_url, duration, start_time, end_time, genres)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
"#;

/// Ordering by rowid keeps find-all in insertion order, matching the
/// document store's natural-order cursor.
pub const SELECT_ALL_CONTENTS: &str = r#"
SELECT id, title, subtitle, description, image_url, duration, start_time, end_time, genres
FROM contents
ORDER BY rowid ASC
"#;

pub const SELECT_CONTENT_BY_ID: &str = r#"
SELECT id, title, subtitle, description, image_url, duration, start_time, end_time, genres
FROM contents
WHERE id = ?1
"#;

pub const REPLACE_CONTENT: &str = r#"
UPDATE contents
SET title = ?2, subtitle = ?3, description = ?4, image_url = ?5, duration = ?6, start_time = ?7, end_time = ?8, genres = ?9
WHERE id = ?1
"#;

pub const DELETE_CONTENT: &str = r#"
DELETE FROM contents
WHERE id = ?1
"#;
