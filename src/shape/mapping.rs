//! The key-value containers that [`pick`](super::pick) and
//! [`omit`](super::omit) accept.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A map whose entries can be enumerated.
///
/// `pick` and `omit` additionally collect the selected entries back into
/// the same map type through its [`FromIterator`] implementation.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use fnutils::shape::Mapping;
///
/// fn keys_of<M: Mapping>(map: &M) -> Vec<&M::Key> {
///     map.entries().map(|(key, _)| key).collect()
/// }
///
/// let map = BTreeMap::from([("b", 2), ("a", 1)]);
/// assert_eq!(keys_of(&map), vec![&"a", &"b"]);
/// ```
pub trait Mapping {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Returns every entry of the map, in the map's own iteration order.
    fn entries(&self) -> impl Iterator<Item = (&Self::Key, &Self::Value)>;
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

impl<K, V> Mapping for BTreeMap<K, V>
where
    K: Ord,
{
    type Key = K;
    type Value = V;

    fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl Mapping for serde_json::Map<String, serde_json::Value> {
    type Key = String;
    type Value = serde_json::Value;

    fn entries(&self) -> impl Iterator<Item = (&String, &serde_json::Value)> {
        self.iter()
    }
}
