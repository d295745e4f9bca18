//! Conversions between `Uint128` and the native `u128`
//!
//! Both types cover exactly the same range, so the conversions are lossless
//! in both directions.

use crate::primitives::Uint128;

impl From<u128> for Uint128 {
    fn from(value: u128) -> Self {
        Uint128::from_parts((value >> 64) as u64, value as u64)
    }
}

impl From<Uint128> for u128 {
    fn from(value: Uint128) -> Self {
        ((value.high as u128) << 64) | value.low as u128
    }
}
