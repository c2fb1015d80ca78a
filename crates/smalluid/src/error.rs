use thiserror::Error;

/// All possible errors that `smalluid` can produce.
///
/// Construction either fully succeeds with a consistent hex/base62 pair, or
/// fails with one of these variants; no partially-initialized identifier is
/// ever produced. Validation is deterministic, so none of these are worth
/// retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidFormat {
    /// The input string was empty.
    #[error("input is empty")]
    Empty,

    /// A byte outside `[0-9a-fA-F]` was found while reading a hex string.
    #[error("invalid hex byte {byte:#04x} at index {index}")]
    InvalidHexByte { byte: u8, index: usize },

    /// A byte outside `[0-9A-Za-z]` was found while decoding a base62 string.
    #[error("invalid base62 byte {byte:#04x} at index {index}")]
    InvalidBase62Byte { byte: u8, index: usize },

    /// The hex form had the wrong number of characters.
    #[error("invalid hex length: expected {expected} chars, got {got}")]
    InvalidHexLength { got: usize, expected: usize },

    /// The decoded base62 value does not fit the 64-bit identifier range.
    #[error("base62 value overflows the 64-bit identifier range")]
    Overflow,
}
