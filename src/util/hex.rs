//! # Hex Utilities
//!
//! Thin wrappers around the `hex` crate used for telegram input and log
//! output. Reference telegrams copied out of driver test notes often carry
//! `|`, `_` or space separators, so a lenient parser is provided alongside
//! the strict one.

use thiserror::Error;

/// Errors that can occur during hex operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("Empty hex string")]
    EmptyString,

    #[error("Odd number of hex characters: {0}")]
    OddLength(usize),

    #[error("Hex decoding error: {0}")]
    DecodeError(String),
}

/// Encode bytes to a lowercase hex string.
pub fn encode_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// Decode a hex string to bytes. Whitespace is stripped; any other
/// character is an error.
pub fn decode_hex(hex_str: &str) -> Result<Vec<u8>, HexError> {
    if hex_str.is_empty() {
        return Err(HexError::EmptyString);
    }

    let cleaned: String = hex_str.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.len() % 2 != 0 {
        return Err(HexError::OddLength(cleaned.len()));
    }

    hex::decode(&cleaned).map_err(|e| HexError::DecodeError(e.to_string()))
}

/// Parse a hex string that may contain separators (`|`, `_`, spaces).
/// Strips every non-hex character before decoding.
pub fn parse_hex_lenient(input: &str) -> Result<Vec<u8>, HexError> {
    let hex_chars: String = input.chars().filter(|c| c.is_ascii_hexdigit()).collect();

    if hex_chars.is_empty() {
        return Err(HexError::EmptyString);
    }

    if hex_chars.len() % 2 != 0 {
        return Err(HexError::OddLength(hex_chars.len()));
    }

    hex::decode(&hex_chars).map_err(|e| HexError::DecodeError(e.to_string()))
}
