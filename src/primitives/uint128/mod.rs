//! 128-bit unsigned integer primitive
//!
//! This module defines the `Uint128` type, a fixed-size 128-bit unsigned
//! integer represented as a most-significant and a least-significant
//! 64-bit half.
//!
//! Typical use cases include:
//! - identifiers and hash prefixes
//! - network addresses
//! - counters that need more than 64 bits
//!
//! The semantic ordering is big-endian: `high` always holds the most
//! significant bits, and every serialized form writes it first.

mod conv;
mod core;
mod error;
mod ops;
#[cfg(feature = "serde")]
mod serde;

pub use self::core::Uint128;
pub use self::error::FormatError;
