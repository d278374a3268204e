use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalog content record: a media item with scheduling metadata and
/// genre tags.
///
/// Content values are immutable; every mutation produces a new value that
/// is written back to the store wholesale (the store never receives a
/// partial patch). The `start_time <= end_time` ordering is not enforced
/// anywhere in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub id: Uuid,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    /// Playback duration in whole time units.
    pub duration: u32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Ordered genre tags. Semantically a set, but represented as a
    /// sequence: duplicates are possible and are never deduplicated.
    pub genres: Vec<String>,
}

impl Content {
    /// Creates a new content record with a fresh identifier.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        description: impl Into<String>,
        image_url: impl Into<String>,
        duration: u32,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        genres: Vec<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            subtitle: subtitle.into(),
            description: description.into(),
            image_url: image_url.into(),
            duration,
            start_time,
            end_time,
            genres,
        }
    }

    /// Sets a specific ID for this content (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Replaces the genre list on this content.
    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }
}
