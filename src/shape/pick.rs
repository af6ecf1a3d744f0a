use super::Mapping;

/// Returns a new map holding the entries of `map` whose key is in `keys`.
///
/// Keys that `map` does not contain are skipped. Keys and values are
/// cloned; the copy is shallow, so an `Rc` or `Arc` value is shared with
/// the original rather than duplicated.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use fnutils::shape::pick;
///
/// let user = HashMap::from([
///     ("name".to_string(), "Ferris"),
///     ("role".to_string(), "mascot"),
///     ("password".to_string(), "hunter2"),
/// ]);
///
/// let public = pick(&user, &["name", "role", "email"]);
/// assert_eq!(public.len(), 2);
/// assert_eq!(public["name"], "Ferris");
/// assert!(!public.contains_key("password"));
/// ```
pub fn pick<M, K>(map: &M, keys: &[K]) -> M
where
    M: Mapping + FromIterator<(M::Key, M::Value)>,
    M::Key: Clone + PartialEq<K>,
    M::Value: Clone,
{
    map.entries()
        .filter(|(key, _)| keys.iter().any(|selected| *key == selected))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Applies [`pick`] to a JSON object.
///
/// Anything other than an object yields an empty object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use fnutils::shape::pick_value;
///
/// let point = json!({"x": 1, "y": 2, "z": 3});
/// assert_eq!(pick_value(&point, &["x", "z"]), json!({"x": 1, "z": 3}));
/// assert_eq!(pick_value(&json!([1, 2]), &["x"]), json!({}));
/// ```
#[cfg(feature = "serde")]
pub fn pick_value<K>(value: &serde_json::Value, keys: &[K]) -> serde_json::Value
where
    String: PartialEq<K>,
{
    let picked = value
        .as_object()
        .map(|object| pick(object, keys))
        .unwrap_or_default();
    serde_json::Value::Object(picked)
}
