use std::fmt;
use thiserror::Error;

/// Reasons for rejecting a boundary list in [`IntervalMap::from_boundaries`].
///
/// [`IntervalMap::from_boundaries`]: crate::IntervalMap::from_boundaries
#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum IntervalMapError<K: fmt::Debug, V: fmt::Debug> {
    #[error("unordered boundary key {0:?}")]
    UnorderedKey(K),
    #[error("redundant boundary at {0:?} repeats value {1:?}")]
    RedundantBoundary(K, V),
}
