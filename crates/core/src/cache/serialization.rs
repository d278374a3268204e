//! Pure functions for serializing/deserializing contents to/from cache bytes.
//!
//! Cache values are JSON, which keeps them human-readable when inspecting a
//! live cache. Callers treat a failed deserialization as a cache miss.

use thiserror::Error;

use crate::catalog::Content;

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a content record to JSON bytes.
pub fn serialize_content(content: &Content) -> Result<Vec<u8>> {
    serde_json::to_vec(content).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a content record.
pub fn deserialize_content(bytes: &[u8]) -> Result<Content> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a slice of content records to JSON bytes.
pub fn serialize_contents(contents: &[Content]) -> Result<Vec<u8>> {
    serde_json::to_vec(contents).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a vector of content records.
pub fn deserialize_contents(bytes: &[u8]) -> Result<Vec<Content>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
