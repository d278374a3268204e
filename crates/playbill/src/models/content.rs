use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use playbill_core::catalog::Content;

/// Request payload for creating a content record or replacing one
/// wholesale.
///
/// Carries every content field except the identifier, which comes from the
/// route (update) or is minted by the service (create). The update
/// endpoint takes a full replacement, never a partial patch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentInput {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    pub duration: u32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl ContentInput {
    /// Converts the input into a content record under the given ID.
    pub fn into_content(self, id: Uuid) -> Content {
        Content {
            id,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            image_url: self.image_url,
            duration: self.duration,
            start_time: self.start_time,
            end_time: self.end_time,
            genres: self.genres,
        }
    }
}
