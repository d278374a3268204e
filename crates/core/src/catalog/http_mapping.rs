//! Pure functions for mapping catalog errors to HTTP status codes.

use super::CatalogError;
use crate::storage::repository_error_to_status_code;

/// Maps a [`CatalogError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Validation` -> 400 (Bad Request)
/// - `CreationFailed` -> 500 (Internal Server Error)
/// - `Store` -> delegated to the repository mapping
///   (connection failures surface as 503, the rest as 5xx/4xx)
pub fn catalog_error_to_status_code(error: &CatalogError) -> u16 {
    match error {
        CatalogError::NotFound => 404,
        CatalogError::Validation(_) => 400,
        CatalogError::CreationFailed => 500,
        CatalogError::Store(repo_error) => repository_error_to_status_code(repo_error),
    }
}
