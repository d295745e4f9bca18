//! Conversion utilities
//!
//! This module groups explicit conversions between `Uint128` and other
//! representations, following these principles:
//! - explicit big-endian semantics
//! - no implicit truncation
//! - fallible conversions when the input may not fit
//!
//! Conversions are split by representation to keep each file small and
//! easy to audit.

mod binary;
mod bytes;
mod hex;
mod u128;
mod u64;
