use super::Mapping;

/// Returns a new map holding the entries of `map` whose key is not in
/// `keys`.
///
/// The complement of [`pick`](super::pick): for the same keys, the two
/// results are disjoint and together hold every entry of `map`. Copies are
/// shallow, as with `pick`.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use fnutils::shape::omit;
///
/// let settings = BTreeMap::from([("theme", "dark"), ("token", "secret")]);
/// let shareable = omit(&settings, &["token"]);
/// assert_eq!(shareable, BTreeMap::from([("theme", "dark")]));
/// ```
pub fn omit<M, K>(map: &M, keys: &[K]) -> M
where
    M: Mapping + FromIterator<(M::Key, M::Value)>,
    M::Key: Clone + PartialEq<K>,
    M::Value: Clone,
{
    map.entries()
        .filter(|(key, _)| !keys.iter().any(|excluded| *key == excluded))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Applies [`omit`] to a JSON object.
///
/// Anything other than an object is returned unchanged.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use fnutils::shape::omit_value;
///
/// let user = json!({"name": "Ferris", "password": "hunter2"});
/// assert_eq!(omit_value(&user, &["password"]), json!({"name": "Ferris"}));
/// assert_eq!(omit_value(&json!(42), &["password"]), json!(42));
/// ```
#[cfg(feature = "serde")]
pub fn omit_value<K>(value: &serde_json::Value, keys: &[K]) -> serde_json::Value
where
    String: PartialEq<K>,
{
    match value {
        serde_json::Value::Object(object) => serde_json::Value::Object(omit(object, keys)),
        other => other.clone(),
    }
}
