//! A one-function helper shared by the reverse-index builders — too
//! trivial to warrant its own type, per the component design notes.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

/// `map[key].insert(value)`, creating an empty set for `key` on first use.
pub fn set_add<K, V>(map: &mut IndexMap<K, IndexSet<V>>, key: K, value: V)
where
    K: Eq + Hash,
    V: Eq + Hash,
{
    map.entry(key).or_default().insert(value);
}
