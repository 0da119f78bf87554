use std::ops::Range;

use crate::IntervalMap;

impl<K: Ord + Clone, V: Clone + PartialEq> IntervalMap<K, V> {
    /// Assigns `value` to every key in `begin..end`.
    ///
    /// Values outside the interval stay untouched. If `begin >= end` the
    /// interval is empty and nothing happens.
    ///
    /// Afterwards the boundaries are in canonical form again: the interval is
    /// merged with equal-valued neighbours on either side, and only the
    /// boundaries needed to describe the new mapping are kept.
    ///
    /// Running out of memory mid-way aborts the process; that is the only
    /// way to observe a map that is not in canonical form.
    pub fn assign(&mut self, begin: K, end: K, value: V) {
        if begin >= end {
            log::trace!("assign: empty interval, nothing to do");
            return;
        }

        // The value at `end` has to show through again once the interval is
        // overwritten. It must be captured before erasing, as the boundary
        // governing `end` may lie inside the interval.
        let end_value = match self.boundaries.get_exact(&end) {
            Some(_) => None,
            None => Some(self.get(&end).clone()),
        };

        let erased = self.boundaries.remove_range(&begin, &end);

        let right_edge = match end_value {
            Some(end_value) if end_value != value => {
                self.boundaries.insert(end, end_value);
                true
            }
            Some(_) => false,
            None => {
                // `end` already is a boundary. It merges into the interval if
                // it carries the same value.
                if self.boundaries.get_exact(&end) == Some(&value) {
                    self.boundaries.remove(&end);
                    false
                } else {
                    true
                }
            }
        };

        let left_edge = *self.value_before(&begin) != value;
        if left_edge {
            self.boundaries.insert(begin, value);
        }

        log::trace!(
            "assign: erased {} boundaries, left edge: {}, right edge: {}",
            erased,
            left_edge,
            right_edge
        );

        #[cfg(test)]
        self.assert_invariants();
    }
}

impl<K: Ord + Clone, V: Clone + PartialEq> Extend<(Range<K>, V)> for IntervalMap<K, V> {
    /// Assigns each interval in turn, later ones overwriting earlier ones.
    fn extend<I: IntoIterator<Item = (Range<K>, V)>>(&mut self, iter: I) {
        for (range, value) in iter {
            self.assign(range.start, range.end, value);
        }
    }
}
