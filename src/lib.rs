//! # Interval map
//!
//! An `IntervalMap` associates *every* key of a totally ordered domain with a
//! value, while storing only the keys where the value changes. Assigning a
//! value to a half-open range `begin..end` costs `O(log n)` plus the number of
//! boundaries it overwrites, and a lookup is a single `O(log n)` predecessor
//! search.
//!
//! The internal representation is always *canonical*: no two neighbouring
//! boundaries carry the same value, and the first boundary never repeats the
//! background value. Two maps representing the same key-to-value function
//! are therefore always equal.
//!
//! # Example usage
//!
//! ```rust
//! use interval_map::IntervalMap;
//!
//! // Every key starts out mapped to 'A'.
//! let mut map = IntervalMap::<i32, char>::new('A');
//!
//! map.assign(1, 5, 'B');
//! assert_eq!(('A', 'B', 'B', 'A'), (map[&0], map[&1], map[&4], map[&5]));
//!
//! // Overlapping assignments overwrite what was there before.
//! map.assign(3, 7, 'C');
//! assert_eq!(
//!     vec![(&1, &'B'), (&3, &'C'), (&7, &'A')],
//!     map.iter().collect::<Vec<_>>(),
//! );
//!
//! // Painting with the background value erases.
//! map.assign(0, 10, 'A');
//! assert!(map.is_empty());
//! ```

// Like most small collection crates, we re-export everything in the crate
// root and keep the module structure private.
mod assign;
mod debug;
mod error;
mod fmt;
mod iter;
mod rangemap;
#[cfg(feature = "serde")]
mod serialization;
mod snapshot;

pub use crate::error::*;
pub use crate::iter::*;

use std::borrow::Borrow;
use std::ops::Index;

use crate::rangemap::RangeFromMap;

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

/// A map from half-open key intervals to values.
///
/// # Terminology
///
/// - The *background value* covers all keys below the first boundary (or the
///   whole domain if there are no boundaries). It is fixed at construction.
/// - A *boundary* `(k, v)` means that all keys from `k` up to the next
///   boundary map to `v`.
///
/// # Indexing
///
/// Since every key maps to some value, indexing never panics: `map[&key]` is
/// the same as `map.get(&key)`.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct IntervalMap<K: Ord, V> {
    background: V,
    boundaries: RangeFromMap<K, V>,
}

impl<K: Ord, V> IntervalMap<K, V> {
    /// Constructs a new interval map, associating every key with
    /// `background`.
    pub fn new(background: V) -> Self {
        Self {
            background,
            boundaries: RangeFromMap::new(),
        }
    }

    /// Returns the value of all keys below the first boundary.
    pub fn background(&self) -> &V {
        &self.background
    }

    /// Returns the value associated with `key`.
    ///
    /// The returned reference borrows the map, so it stays valid until the
    /// next call to `assign`.
    pub fn get<Q>(&self, key: &Q) -> &V
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.boundaries.get(key).unwrap_or(&self.background)
    }

    /// Returns the number of boundaries, i.e. the number of keys at which the
    /// value changes.
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Returns `true` if every key maps to the background value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value governing the keys right below `key`.
    pub(crate) fn value_before(&self, key: &K) -> &V {
        self.boundaries.get_before(key).unwrap_or(&self.background)
    }
}

#[cfg(test)]
impl<K: Ord, V: PartialEq> IntervalMap<K, V> {
    /// Panics unless the boundaries are in canonical form.
    pub(crate) fn assert_invariants(&self) {
        let mut last = &self.background;
        for (_, value) in self.boundaries.iter() {
            assert!(value != last, "redundant boundary");
            last = value;
        }
    }
}

impl<K: Ord, V: Default> Default for IntervalMap<K, V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<K: Ord, V> Index<&K> for IntervalMap<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        self.get(key)
    }
}
