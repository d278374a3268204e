mod error;
mod genres;
mod http_mapping;
mod query;
mod types;

pub use error::CatalogError;
pub use genres::{with_genres_added, with_genres_removed};
pub use http_mapping::catalog_error_to_status_code;
pub use query::{filter_contents, paginate};
pub use types::Content;
