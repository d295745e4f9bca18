//! Primitive types
//!
//! Primitives are simple, fixed-size, allocation-free building blocks with
//! well-defined semantics and predictable behavior. They are intentionally
//! minimal and do not attempt to replicate a full big-integer library.
//!
//! Current primitives include:
//! - `Uint128`: a fixed-size 128-bit unsigned integer made of two 64-bit
//!   halves

mod uint128;

/// Fixed-size unsigned integer primitive and its parse error.
pub use uint128::{FormatError, Uint128};
