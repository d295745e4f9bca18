//! Conversions between `Uint128` and 64-bit integers
//!
//! A `u64` always fits in the low half. The reverse conversion only
//! succeeds when the high half is zero.

use crate::primitives::Uint128;

/// Converts a `u64` into a `Uint128`.
///
/// The value is placed in the low half, with the high half set to zero.
impl From<u64> for Uint128 {
    fn from(value: u64) -> Self {
        Uint128::from_u64(value)
    }
}

/// Attempts to convert a `Uint128` into a `u64`.
///
/// The conversion fails if any of the upper 64 bits is set.
impl TryFrom<Uint128> for u64 {
    type Error = ();

    fn try_from(value: Uint128) -> Result<Self, Self::Error> {
        if value.high != 0 {
            return Err(());
        }

        Ok(value.low)
    }
}

/// Splits a `Uint128` into its `[high, low]` halves.
impl From<Uint128> for [u64; 2] {
    fn from(value: Uint128) -> Self {
        [value.high, value.low]
    }
}

/// Joins `[high, low]` halves into a `Uint128`.
impl From<[u64; 2]> for Uint128 {
    fn from(value: [u64; 2]) -> Self {
        Uint128::from_parts(value[0], value[1])
    }
}
