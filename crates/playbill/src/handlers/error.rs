use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use playbill_core::catalog::{catalog_error_to_status_code, CatalogError};

/// Response adapter for catalog errors.
///
/// Handlers return `Result<_, AppError>` and use `?` on service calls;
/// the status code comes from the core mapping so the transport layer
/// carries no error-classification logic of its own.
pub struct AppError(pub CatalogError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = catalog_error_to_status_code(&self.0);
        let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, self.0.to_string()).into_response()
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}
