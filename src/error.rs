//! # Driver Error Handling
//!
//! Errors the decoding library can report to its host. A register that is
//! absent from a telegram is deliberately not an error; it is simply
//! omitted from the result mapping.

use thiserror::Error;

/// Errors surfaced by the wM-Bus driver library.
#[derive(Debug, Error)]
pub enum DriverError {
    /// The requested meter model name matches no known driver.
    #[error("Unknown meter model: {0}")]
    UnknownModel(String),

    /// A telegram supplied as a hex string could not be parsed.
    #[error("Invalid hex telegram: {0}")]
    InvalidHex(String),
}
