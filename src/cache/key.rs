//! Cache keys derived from call arguments.

use std::fmt;

use serde::Serialize;
use serde::ser::Error as _;

use super::depth::{DepthLimited, MAX_DEPTH};
use super::error::SerializationError;

/// The serialized form of a call's arguments.
///
/// Keys are the compact JSON encoding of the argument value, so they are
/// sensitive to argument order (`(1, 2)` and `(2, 1)` differ) and to the
/// JSON type of each argument (`1` and `"1"` differ). Values that serialize
/// identically share a key: `1_u8` and `1_i64` are the same key, and so are
/// two distinct `Rc`s pointing at equal data.
///
/// Nesting is limited to 128 levels, so a value that refers back to itself
/// fails to derive a key instead of recursing without end.
///
/// # Examples
///
/// ```rust
/// use fnutils::cache::CacheKey;
///
/// let key = CacheKey::derive(&(1, "two", [3.5])).unwrap();
/// assert_eq!(key.as_str(), r#"[1,"two",[3.5]]"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derives the key for `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] when `arguments` cannot be serialized
    /// or nest too deeply.
    pub fn derive<A>(arguments: &A) -> Result<Self, SerializationError>
    where
        A: Serialize + ?Sized,
    {
        let mut buffer = Vec::new();
        let mut serializer = serde_json::Serializer::new(&mut buffer);
        arguments
            .serialize(DepthLimited::new(&mut serializer, MAX_DEPTH))
            .map_err(SerializationError::new)?;

        String::from_utf8(buffer)
            .map(Self)
            .map_err(|error| SerializationError::new(serde_json::Error::custom(error)))
    }

    /// Returns the serialized arguments.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}
