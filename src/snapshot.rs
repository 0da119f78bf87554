use std::fmt;

use crate::{IntervalMap, IntervalMapError};

impl<K: Ord + fmt::Debug, V: PartialEq + fmt::Debug> IntervalMap<K, V> {
    /// Rebuilds an interval map from its background value and boundaries.
    ///
    /// `boundaries` must be in the form `iter()` produces: keys strictly
    /// ascending, and no boundary repeating the value right before it (the
    /// first one is compared to `background`). Anything else is rejected
    /// instead of being compacted, as it was not produced by an
    /// `IntervalMap`.
    pub fn from_boundaries<I>(
        background: V,
        boundaries: I,
    ) -> Result<Self, IntervalMapError<K, V>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new(background);
        for (key, value) in boundaries {
            if let Some(last_key) = map.boundaries.last_key() {
                if key <= *last_key {
                    log::debug!("from_boundaries: rejected unordered key");
                    return Err(IntervalMapError::UnorderedKey(key));
                }
            }
            let previous = map.boundaries.get(&key).unwrap_or(&map.background);
            if *previous == value {
                log::debug!("from_boundaries: rejected redundant boundary");
                return Err(IntervalMapError::RedundantBoundary(key, value));
            }
            map.boundaries.insert(key, value);
        }
        Ok(map)
    }
}
