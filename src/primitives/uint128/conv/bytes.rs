//! Conversions between `Uint128` and big-endian byte representations
//!
//! The encoding is always 16 bytes: the high half first (bytes 0-7), then
//! the low half (bytes 8-15), each most significant byte first.
//!
//! Shorter inputs are accepted when parsing and are read as the low-order
//! bytes of a zero-padded 16-byte value.

use crate::primitives::uint128::{FormatError, Uint128};

impl Uint128 {
    /// Encodes the value as 16 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 16] {
        let mut out = [0u8; 16];

        out[..8].copy_from_slice(&self.high.to_be_bytes());
        out[8..].copy_from_slice(&self.low.to_be_bytes());

        out
    }

    /// Decodes exactly 16 big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        let mut high = [0u8; 8];
        let mut low = [0u8; 8];

        high.copy_from_slice(&bytes[..8]);
        low.copy_from_slice(&bytes[8..]);

        Uint128::from_parts(u64::from_be_bytes(high), u64::from_be_bytes(low))
    }

    /// Decodes up to 16 big-endian bytes.
    ///
    /// Inputs shorter than 16 bytes are left-padded with zero bytes, so
    /// `[0x04, 0x56]` decodes to `0x456`. An empty slice decodes to zero.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::BytesTooLong`] if `bytes` is longer than
    /// 16 bytes.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self, FormatError> {
        if bytes.len() > Self::BYTE_LEN {
            return Err(FormatError::BytesTooLong { len: bytes.len() });
        }

        let mut buf = [0u8; 16];
        buf[Self::BYTE_LEN - bytes.len()..].copy_from_slice(bytes);

        Ok(Self::from_be_bytes(buf))
    }
}

/// Converts a `Uint128` into its 16-byte big-endian encoding.
impl From<Uint128> for [u8; 16] {
    fn from(value: Uint128) -> Self {
        value.to_be_bytes()
    }
}

/// Converts a 16-byte big-endian array into a `Uint128`.
impl From<[u8; 16]> for Uint128 {
    fn from(value: [u8; 16]) -> Self {
        Uint128::from_be_bytes(value)
    }
}

/// Parses up to 16 big-endian bytes, see [`Uint128::from_be_slice`].
impl TryFrom<&[u8]> for Uint128 {
    type Error = FormatError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Uint128::from_be_slice(value)
    }
}
