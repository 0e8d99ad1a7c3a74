//! Generic JSON encode/decode helpers.
//!
//! Thin wrappers over `serde_json` so callers deal with a single error type.
//! Decoding is driven by the target type: a JSON array is fed into the type's
//! fields positionally, in declaration order, and a JSON object is matched by
//! field name.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors produced by [`serialize`] and [`deserialize`].
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be represented as JSON.
    #[error("failed to encode value as JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The text was not valid JSON for the requested type.
    #[error("failed to decode JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Encode `value` as compact JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Encode`] if the value's `Serialize` impl fails,
/// e.g. a map with non-string keys.
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Encode)
}

/// Reconstruct a `T` from JSON text.
///
/// # Example
/// ```
/// use selkit_common::{Rectangle, deserialize};
///
/// let rect: Rectangle = deserialize("[3.0, 4.0]").unwrap();
/// assert_eq!(rect, Rectangle::new(3.0, 4.0));
/// ```
///
/// # Errors
///
/// Returns [`JsonError::Decode`] if `text` is not valid JSON or does not
/// have the shape `T` expects.
pub fn deserialize<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Decode)
}
