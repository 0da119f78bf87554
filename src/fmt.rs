use crate::IntervalMap;

use std::fmt;

impl<K: Ord + fmt::Display, V: fmt::Display> fmt::Display for IntervalMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "..: {}", self.background)?;
        for (key, value) in self.iter() {
            write!(f, ", {}..: {}", key, value)?;
        }
        Ok(())
    }
}
