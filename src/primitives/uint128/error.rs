use std::fmt::{Display, Formatter};

/// Errors that can occur while parsing a `Uint128` from hexadecimal text or
/// big-endian bytes.
///
/// Arithmetic, bitwise operations, comparison and serialization never fail;
/// this type is only produced by the parsing constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The hexadecimal input has more than 32 characters.
    HexTooLong { len: usize },

    /// The hexadecimal input contains a character that is not a hex digit.
    ///
    /// `index` is the byte offset of the character in the caller's input.
    InvalidHexCharacter { c: char, index: usize },

    /// The byte input has more than 16 bytes.
    BytesTooLong { len: usize },
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::HexTooLong { len } => {
                write!(f, "hex string of length {len} is greater than 32")
            }
            FormatError::InvalidHexCharacter { c, index } => {
                write!(f, "invalid hex character {c:?} at index {index}")
            }
            FormatError::BytesTooLong { len } => {
                write!(f, "byte length {len} is greater than 16")
            }
        }
    }
}

impl std::error::Error for FormatError {}
