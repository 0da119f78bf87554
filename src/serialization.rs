//! Serde support.
//!
//! An `IntervalMap` is serialized as its background value plus the list of
//! boundaries in ascending key order. Deserialization validates that list, so
//! a non-canonical document is an error rather than a corrupt map.

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::rangemap::RangeFromMap;
use crate::IntervalMap;

struct SerializeBoundaries<'a, K: Ord, V>(&'a RangeFromMap<K, V>);

impl<K: Ord + Serialize, V: Serialize> Serialize for SerializeBoundaries<'_, K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<K: Ord + Serialize, V: Serialize> Serialize for IntervalMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("IntervalMap", 2)?;
        state.serialize_field("background", &self.background)?;
        state.serialize_field("boundaries", &SerializeBoundaries(&self.boundaries))?;
        state.end()
    }
}

#[derive(Deserialize)]
#[serde(rename = "IntervalMap")]
struct RawIntervalMap<K, V> {
    background: V,
    boundaries: Vec<(K, V)>,
}

impl<'de, K, V> Deserialize<'de> for IntervalMap<K, V>
where
    K: Ord + fmt::Debug + Deserialize<'de>,
    V: PartialEq + fmt::Debug + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawIntervalMap::<K, V>::deserialize(deserializer)?;
        IntervalMap::from_boundaries(raw.background, raw.boundaries).map_err(de::Error::custom)
    }
}
