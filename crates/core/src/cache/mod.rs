mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{item_key, list_key};
pub use serialization::{
    deserialize_content, deserialize_contents, serialize_content, serialize_contents,
};
pub use traits::Cache;
