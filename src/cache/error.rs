//! Error types for the cache module.

use std::error::Error;
use std::fmt;

/// Represents a failure to derive a cache key from call arguments.
///
/// Arguments are turned into keys by serialization. Values whose
/// `Serialize` implementation fails (a live handle, say), that nest more
/// than 128 levels deep (a structure that refers back to itself) or that
/// have no JSON form (a map with non-string keys) cannot be keyed, and the
/// call is rejected before the wrapped function runs.
///
/// # Examples
///
/// ```rust
/// use fnutils::cache::memoize;
/// use std::collections::HashMap;
///
/// let count = memoize(|map: HashMap<(i32, i32), i32>| map.len());
///
/// let error = count.call(HashMap::from([((1, 2), 3)])).unwrap_err();
/// assert!(error.to_string().starts_with("cannot derive a cache key"));
/// ```
#[derive(Debug)]
pub struct SerializationError {
    source: serde_json::Error,
}

impl SerializationError {
    pub(crate) const fn new(source: serde_json::Error) -> Self {
        Self { source }
    }
}

impl fmt::Display for SerializationError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "cannot derive a cache key from the arguments: {}",
            self.source
        )
    }
}

impl Error for SerializationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    #[test]
    fn test_serialization_error_display() {
        let error = SerializationError::new(serde_json::Error::custom("cycle detected"));
        assert_eq!(
            format!("{error}"),
            "cannot derive a cache key from the arguments: cycle detected"
        );
    }

    #[test]
    fn test_serialization_error_source_is_serde_error() {
        let error = SerializationError::new(serde_json::Error::custom("cycle detected"));
        let source = error.source().expect("source");
        assert_eq!(source.to_string(), "cycle detected");
    }
}
