//! SQLite repository implementation.
//!
//! Implements the repository trait from `playbill_core::storage` using
//! SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use playbill_core::catalog::Content;
use playbill_core::storage::{ContentRepository, RepositoryError, Result};

use super::conversions::{format_datetime, genres_to_json, row_to_content};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based repository implementation.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist. Schema
    /// tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES).map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl ContentRepository for SqliteRepository {
    async fn find_all(&self) -> Result<Vec<Content>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_CONTENTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_content).map_err(wrap_err)?;

                let mut contents = Vec::new();
                for row_result in rows {
                    contents.push(row_result.map_err(wrap_err)?);
                }
                Ok(contents)
            })
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Content>> {
        let id_str = id.to_string();

        self.conn
            .call(move |conn| {
                let mut stmt = conn
                    .prepare(schema::SELECT_CONTENT_BY_ID)
                    .map_err(wrap_err)?;
                match stmt.query_row([&id_str], row_to_content) {
                    Ok(content) => Ok(Some(content)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Content", id.to_string()))
    }

    async fn insert(&self, content: &Content) -> Result<Content> {
        let stored = content.clone();
        let id = content.id.to_string();
        let title = content.title.clone();
        let subtitle = content.subtitle.clone();
        let description = content.description.clone();
        let image_url = content.image_url.clone();
        let duration = content.duration;
        let start_time = format_datetime(&content.start_time);
        let end_time = format_datetime(&content.end_time);
        let genres_json = genres_to_json(&content.genres)?;
        let content_id = content.id.to_string();

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_CONTENT,
                    rusqlite::params![
                        id,
                        title,
                        subtitle,
                        description,
                        image_url,
                        duration,
                        start_time,
                        end_time,
                        genres_json
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Content", content_id))?;

        Ok(stored)
    }

    async fn replace(&self, id: Uuid, content: &Content) -> Result<Content> {
        let stored = content.clone();
        let id_str = id.to_string();
        let title = content.title.clone();
        let subtitle = content.subtitle.clone();
        let description = content.description.clone();
        let image_url = content.image_url.clone();
        let duration = content.duration;
        let start_time = format_datetime(&content.start_time);
        let end_time = format_datetime(&content.end_time);
        let genres_json = genres_to_json(&content.genres)?;
        let content_id = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(
                        schema::REPLACE_CONTENT,
                        rusqlite::params![
                            id_str,
                            title,
                            subtitle,
                            description,
                            image_url,
                            duration,
                            start_time,
                            end_time,
                            genres_json
                        ],
                    )
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Content", content_id))?;

        Ok(stored)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Uuid> {
        let id_str = id.to_string();
        let content_id = id.to_string();

        self.conn
            .call(move |conn| {
                let rows = conn
                    .execute(schema::DELETE_CONTENT, [&id_str])
                    .map_err(wrap_err)?;
                if rows == 0 {
                    Err(wrap_err(rusqlite::Error::QueryReturnedNoRows))
                } else {
                    Ok(())
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Content", content_id))?;

        Ok(id)
    }
}
