//! Fixed-width 128-bit unsigned integer primitive
//!
//! This crate provides `Uint128`, a 128-bit unsigned integer stored as two
//! 64-bit halves (`high`, `low`). It is a foundational value type for
//! higher-level code that needs 128-bit identifiers, hashes or network
//! addresses without pulling in an arbitrary-precision library.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `Uint128` type itself, its arithmetic and bitwise operators,
//!   ordering, and conversions to and from native integers, big-endian
//!   bytes, hexadecimal and binary strings.
//!
//! # Semantics
//!
//! - Every operation is pure and returns a new value; operands are never
//!   mutated.
//! - Addition and subtraction wrap modulo 2¹²⁸, like native fixed-width
//!   unsigned integers. Overflow is never reported as an error.
//! - Only parsing can fail, and it fails with a `FormatError`.
//!
//! # Features
//!
//! - `serde`: (de)serialize `Uint128` as its canonical `0x`-prefixed,
//!   32-digit hexadecimal string.
//!
//! Multiplication, division and signed values are out of scope.

pub mod primitives;

pub use primitives::{FormatError, Uint128};
