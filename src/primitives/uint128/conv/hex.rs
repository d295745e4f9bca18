//! Conversions between `Uint128` and hexadecimal strings
//!
//! Two output forms exist:
//! - **compact**: no leading zeros when the high half is zero, otherwise
//!   the high half without leading zeros followed by the low half padded to
//!   exactly 16 digits (`"456"`, `"10000000000000456"`)
//! - **canonical**: `0x` followed by exactly 32 digits, as produced by
//!   `Display`
//!
//! Parsing accepts up to 32 digits, read as the low-order digits of a
//! zero-padded 32-digit value.

use std::fmt::{Formatter, LowerHex};
use std::str::FromStr;

use crate::primitives::uint128::{FormatError, Uint128};

impl Uint128 {
    /// Parses up to 32 hexadecimal digits, most significant digit first.
    ///
    /// Inputs shorter than 32 digits are left-padded with `'0'`. Both
    /// lowercase and uppercase digits are accepted; no `0x` prefix is
    /// allowed here (see the `FromStr` impl for that). The empty string
    /// parses as zero.
    ///
    /// # Errors
    ///
    /// - [`FormatError::HexTooLong`] if `s` has more than 32 characters
    /// - [`FormatError::InvalidHexCharacter`] if `s` contains a character
    ///   that is not a hex digit
    pub fn from_hex_str(s: &str) -> Result<Self, FormatError> {
        let input = s.as_bytes();
        if input.len() > Self::HEX_LEN {
            return Err(FormatError::HexTooLong { len: input.len() });
        }

        let pad = Self::HEX_LEN - input.len();
        let mut digits = [b'0'; 32];
        digits[pad..].copy_from_slice(input);

        let mut bytes = [0u8; 16];
        match ::hex::decode_to_slice(digits, &mut bytes) {
            Ok(()) => Ok(Self::from_be_bytes(bytes)),
            Err(::hex::FromHexError::InvalidHexCharacter { c, index }) => {
                let index = index - pad;
                // Report the full character, not the offending UTF-8 byte.
                let c = s.get(index..).and_then(|r| r.chars().next()).unwrap_or(c);

                Err(FormatError::InvalidHexCharacter { c, index })
            }
            Err(_) => unreachable!("padded input is always 32 digits"),
        }
    }

    /// Formats the value as compact lowercase hex.
    ///
    /// When the high half is zero only the low half is printed, without
    /// leading zeros. Otherwise the high half is printed without leading
    /// zeros, followed by the low half zero-padded to 16 digits.
    pub fn to_hex_compact(&self) -> String {
        if self.high == 0 {
            format!("{:x}", self.low)
        } else {
            format!("{:x}{:016x}", self.high, self.low)
        }
    }

    /// Formats the value as `0x` followed by exactly 32 lowercase hex digits.
    ///
    /// This is the compact form zero-padded to full width, and is identical
    /// to the `Display` output.
    pub fn to_hex_canonical(&self) -> String {
        format!("0x{:0>32}", self.to_hex_compact())
    }
}

/// Compact lowercase hex. Honours `#` (adds `0x`), width and zero-fill.
impl LowerHex for Uint128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad_integral(true, "0x", &self.to_hex_compact())
    }
}

/// Parses hex digits with an optional `0x` or `0X` prefix, so that the
/// canonical `Display` output parses back to the same value.
impl FromStr for Uint128 {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, digits) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(digits) => (2, digits),
            None => (0, s),
        };

        Uint128::from_hex_str(digits).map_err(|err| match err {
            FormatError::InvalidHexCharacter { c, index } => FormatError::InvalidHexCharacter {
                c,
                index: index + prefix,
            },
            other => other,
        })
    }
}
