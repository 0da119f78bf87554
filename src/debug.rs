use std::fmt;

use crate::IntervalMap;

impl<K: Ord + fmt::Debug, V: fmt::Debug> IntervalMap<K, V> {
    /// Returns a table of all boundaries, one per line.
    ///
    /// The first row (key `..`) holds the background value.
    pub fn formatted_boundaries(&self) -> String {
        let mut result = format!("{:<12} | value\n", "key");
        result += &format!("{:<12} | {:?}\n", "..", self.background);
        for (key, value) in self.iter() {
            let key = format!("{:?}", key);
            result += &format!("{:<12} | {:?}\n", key, value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::IntervalMap;

    #[test]
    fn formatted_boundaries() {
        let mut map = IntervalMap::<i32, char>::new('A');
        map.assign(-2, 5, 'B');
        assert_eq!(
            "key          | value\n\
             ..           | 'A'\n\
             -2           | 'B'\n\
             5            | 'A'\n",
            map.formatted_boundaries()
        );
    }
}
