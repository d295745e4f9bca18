//! `serde` support for `Uint128`
//!
//! Values are serialized as their canonical string (`0x` followed by 32
//! hex digits) and deserialized through `FromStr`, which also accepts the
//! shorter, unprefixed forms.

use std::fmt::Formatter;

use ::serde::de::{self, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::primitives::uint128::Uint128;

impl Serialize for Uint128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct Uint128Visitor;

impl Visitor<'_> for Uint128Visitor {
    type Value = Uint128;

    fn expecting(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("a hex string of at most 32 digits, optionally prefixed with 0x")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for Uint128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(Uint128Visitor)
    }
}
