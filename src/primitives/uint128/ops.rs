//! Arithmetic and bitwise operations for `Uint128`
//!
//! Every operation takes its operands by value and returns a fresh
//! `Uint128`; nothing is updated in place.
//!
//! Addition and subtraction wrap modulo 2¹²⁸. Unlike the native integer
//! operators, the `+` and `-` implementations here wrap in debug builds too,
//! since wraparound is the defined behavior of this type rather than an
//! overflow bug.

use crate::primitives::uint128::Uint128;
use std::ops::{Add, BitAnd, BitOr, BitXor, Not, Sub};

impl Uint128 {
    /// Bitwise AND, applied independently to each half.
    pub const fn and(self, rhs: Self) -> Self {
        Self::from_parts(self.high & rhs.high, self.low & rhs.low)
    }

    /// Bitwise OR, applied independently to each half.
    pub const fn or(self, rhs: Self) -> Self {
        Self::from_parts(self.high | rhs.high, self.low | rhs.low)
    }

    /// Bitwise XOR, applied independently to each half.
    pub const fn xor(self, rhs: Self) -> Self {
        Self::from_parts(self.high ^ rhs.high, self.low ^ rhs.low)
    }

    /// Wrapping (modular) addition.
    ///
    /// The low halves are added first. If the sum is smaller than an
    /// operand, the low half wrapped and a carry of one flows into the high
    /// half. Overflow of the high half wraps silently.
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        let low = self.low.wrapping_add(rhs.low);
        let carry = (low < self.low) as u64;
        let high = self.high.wrapping_add(rhs.high).wrapping_add(carry);

        Self::from_parts(high, low)
    }

    /// Wrapping (modular) subtraction.
    ///
    /// If the subtrahend's low half exceeds the minuend's, the low half
    /// wrapped and a borrow of one is taken from the high half. Underflow of
    /// the high half wraps silently.
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        let low = self.low.wrapping_sub(rhs.low);
        let borrow = (rhs.low > self.low) as u64;
        let high = self.high.wrapping_sub(rhs.high).wrapping_sub(borrow);

        Self::from_parts(high, low)
    }
}

impl BitAnd for Uint128 {
    type Output = Uint128;

    fn bitand(self, rhs: Uint128) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Uint128 {
    type Output = Uint128;

    fn bitor(self, rhs: Uint128) -> Self::Output {
        self.or(rhs)
    }
}

impl BitXor for Uint128 {
    type Output = Uint128;

    fn bitxor(self, rhs: Uint128) -> Self::Output {
        self.xor(rhs)
    }
}

/// Bitwise complement of both halves.
impl Not for Uint128 {
    type Output = Uint128;

    fn not(self) -> Self::Output {
        Uint128::from_parts(!self.high, !self.low)
    }
}

/// Wrapping addition, see [`Uint128::wrapping_add`].
impl Add for Uint128 {
    type Output = Uint128;

    fn add(self, rhs: Uint128) -> Self::Output {
        self.wrapping_add(rhs)
    }
}

/// Wrapping subtraction, see [`Uint128::wrapping_sub`].
impl Sub for Uint128 {
    type Output = Uint128;

    fn sub(self, rhs: Uint128) -> Self::Output {
        self.wrapping_sub(rhs)
    }
}
