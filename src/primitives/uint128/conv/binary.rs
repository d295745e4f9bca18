//! Binary string formatting for `Uint128`
//!
//! Follows the same compact convention as the hex form: the high half is
//! only printed when non-zero, and then the low half is padded to 64 digits
//! so that no bits are lost.

use std::fmt::{Binary, Formatter};

use crate::primitives::Uint128;

impl Uint128 {
    /// Formats the value as a binary string without leading zeros.
    pub fn to_binary_string(&self) -> String {
        if self.high == 0 {
            format!("{:b}", self.low)
        } else {
            format!("{:b}{:064b}", self.high, self.low)
        }
    }
}

impl Binary for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(true, "0b", &self.to_binary_string())
    }
}
