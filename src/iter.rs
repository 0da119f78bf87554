use std::collections::btree_map;
use std::iter::FusedIterator;

use crate::IntervalMap;

impl<K: Ord, V> IntervalMap<K, V> {
    /// Returns an iterator over the boundaries in ascending key order.
    ///
    /// Each item `(key, value)` means that `value` applies from `key` up to
    /// the next boundary. Keys below the first boundary map to the
    /// background value, which is not part of the iteration.
    pub fn iter(&self) -> Boundaries<'_, K, V> {
        Boundaries {
            inner: self.boundaries.iter(),
        }
    }

    /// Returns an iterator over the maximal runs of equal values.
    ///
    /// There is always one more run than there are boundaries: the first run
    /// is unbounded below and carries the background value, the last one is
    /// unbounded above. Neighbouring runs never share a value.
    pub fn runs(&self) -> Runs<'_, K, V> {
        Runs {
            current: Some((None, &self.background)),
            boundaries: self.boundaries.iter(),
        }
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a IntervalMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Boundaries<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the boundaries of an [`IntervalMap`].
///
/// Created by [`IntervalMap::iter`]. A clone continues independently from
/// the same position.
#[derive(Clone, Debug)]
pub struct Boundaries<'a, K, V> {
    inner: btree_map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Boundaries<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> DoubleEndedIterator for Boundaries<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Boundaries<'_, K, V> {}

impl<K, V> FusedIterator for Boundaries<'_, K, V> {}

/// A half-open interval `start..end` of keys that all map to `value`.
///
/// `None` stands for an unbounded side.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Run<K, V> {
    pub start: Option<K>,
    pub end: Option<K>,
    pub value: V,
}

impl<K: PartialOrd, V> Run<K, V> {
    /// Returns `true` if `key` lies within this run.
    pub fn contains(&self, key: &K) -> bool {
        self.start.as_ref().map_or(true, |s| s <= key)
            && self.end.as_ref().map_or(true, |e| key < e)
    }
}

/// An iterator over the runs of an [`IntervalMap`].
///
/// Created by [`IntervalMap::runs`].
#[derive(Clone, Debug)]
pub struct Runs<'a, K, V> {
    current: Option<(Option<&'a K>, &'a V)>,
    boundaries: btree_map::Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Runs<'a, K, V> {
    type Item = Run<&'a K, &'a V>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, value) = self.current.take()?;
        let end = match self.boundaries.next() {
            Some((key, next_value)) => {
                self.current = Some((Some(key), next_value));
                Some(key)
            }
            None => None,
        };
        Some(Run { start, end, value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match self.current {
            Some(_) => self.boundaries.len() + 1,
            None => 0,
        };
        (len, Some(len))
    }
}

impl<K, V> ExactSizeIterator for Runs<'_, K, V> {}

impl<K, V> FusedIterator for Runs<'_, K, V> {}
