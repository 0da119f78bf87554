use std::borrow::Borrow;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound;

/// A map containing values for ranges of keys (i.e. `key..`).
///
/// An entry `(k, v)` covers every key from `k` up to (excluding) the next
/// stored key. Keys below the first entry are not covered at all; it's up to
/// the owner to supply a fallback for those.
///
/// Unlike a plain `BTreeMap`, lookups are predecessor searches: `get(&7)`
/// returns the value of the greatest key `<= 7`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct RangeFromMap<K: Ord, V> {
    map: BTreeMap<K, V>,
}

impl<K: Ord, V> RangeFromMap<K, V> {
    pub(crate) fn new() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Returns the value covering `key`, if any entry starts at or below it.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map
            .range((Bound::Unbounded, Bound::Included(key)))
            .map(|(_, v)| v)
            .next_back()
    }

    /// Returns the value covering the keys just below `key`.
    ///
    /// This is the value of the greatest entry *strictly* less than `key`.
    pub(crate) fn get_before<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.map
            .range((Bound::Unbounded, Bound::Excluded(key)))
            .map(|(_, v)| v)
            .next_back()
    }

    /// Returns the value stored exactly at `key`.
    pub(crate) fn get_exact(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Inserts an entry, overwriting an existing one at the same key.
    ///
    /// This performs no compaction whatsoever; callers are responsible for
    /// not inserting a value equal to its left neighbour.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        self.map.insert(key, value);
    }

    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        self.map.remove(key)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub(crate) fn last_key(&self) -> Option<&K> {
        self.map.keys().next_back()
    }

    pub(crate) fn iter(&self) -> btree_map::Iter<'_, K, V> {
        self.map.iter()
    }
}

impl<K: Ord + Clone, V> RangeFromMap<K, V> {
    /// Removes all entries with keys in `[begin, end)` and returns how many
    /// were removed.
    pub(crate) fn remove_range(&mut self, begin: &K, end: &K) -> usize {
        // `BTreeMap` has no range removal, so collect the keys first.
        let keys: Vec<K> = self
            .map
            .range((Bound::Included(begin), Bound::Excluded(end)))
            .map(|(k, _)| k.clone())
            .collect();
        for key in keys.iter() {
            self.map.remove(key);
        }
        keys.len()
    }
}
