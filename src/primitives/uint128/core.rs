//! 128-bit unsigned integer value type
//!
//! This module defines `Uint128` as a **simple, explicit value type**, not
//! as a big-integer library. The value is `high * 2⁶⁴ + low`; any pair of
//! halves is valid, so the type covers the full `[0, 2¹²⁸ − 1]` range.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

/// Fixed-size 128-bit unsigned integer.
///
/// The value is stored as two 64-bit halves in **big-endian** semantic
/// order: `high` holds the most significant 64 bits.
///
/// `Uint128` is `Copy` and every operation returns a new value, so copies
/// can be shared freely between callers and threads.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Uint128 {
    pub(crate) high: u64,
    pub(crate) low: u64,
}

impl Uint128 {
    /// The value zero.
    pub const ZERO: Self = Self::from_parts(0, 0);

    /// The value one.
    pub const ONE: Self = Self::from_parts(0, 1);

    /// The maximum representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self::from_parts(u64::MAX, u64::MAX);

    /// Number of hexadecimal digits in a full-width value.
    pub const HEX_LEN: usize = 32;

    /// Number of bytes in the big-endian encoding.
    pub const BYTE_LEN: usize = 16;

    /// Builds a value from its most and least significant halves.
    pub const fn from_parts(high: u64, low: u64) -> Self {
        Self { high, low }
    }

    /// Builds a value whose low half is `value` and whose high half is zero.
    pub const fn from_u64(value: u64) -> Self {
        Self::from_parts(0, value)
    }

    /// The most significant 64 bits.
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// The least significant 64 bits.
    pub const fn low(&self) -> u64 {
        self.low
    }

    pub const fn is_zero(&self) -> bool {
        self.high == 0 && self.low == 0
    }

    /// Counts the number of leading zero bits, in the range `0..=128`.
    pub const fn leading_zeros(&self) -> u32 {
        if self.high == 0 {
            64 + self.low.leading_zeros()
        } else {
            self.high.leading_zeros()
        }
    }

    /// Compares two values by unsigned magnitude.
    ///
    /// The high halves decide; the low halves only break a tie.
    pub fn compare(&self, other: &Self) -> Ordering {
        match self.high.cmp(&other.high) {
            Ordering::Equal => self.low.cmp(&other.low),
            ord => ord,
        }
    }
}

impl Ord for Uint128 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Uint128 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Uint128 {
    /// Formats the value in its canonical form: `0x` followed by exactly 32
    /// lowercase hexadecimal digits.
    ///
    /// Example:
    /// `0x00000000000000010000000000000456`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "0x{:016x}{:016x}", self.high, self.low)
    }
}
