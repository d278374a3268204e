use thiserror::Error;

use crate::storage::RepositoryError;

/// Outcomes of catalog operations that are not plain success.
///
/// `NotFound` covers both a missed identifier and an empty result set —
/// the two are deliberately collapsed, so an out-of-range page is
/// indistinguishable from an empty collection at this layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("no content matched the request")]
    NotFound,
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("content could not be created")]
    CreationFailed,
    #[error("store error: {0}")]
    Store(#[from] RepositoryError),
}
