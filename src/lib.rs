//! # wmbus-drivers - Meter-Specific Decoders for wM-Bus Telegrams
//!
//! This crate decodes application payloads of wireless M-Bus (EN 13757)
//! telegrams for a closed set of known utility meters (water, heat,
//! electricity, room sensors). The host reception stack is expected to
//! deliver a complete, decrypted, CRC-validated telegram together with a
//! meter model; the library returns a mapping of stable field names
//! (`total_m3`, `flow_temperature_c`, ...) to physical values, or nothing
//! when no known register was found.
//!
//! Decoding is a pure function of the telegram bytes: no I/O, no retained
//! state, no concurrency requirements. Telegrams may be decoded from any
//! number of threads independently.
//!
//! ## Usage
//!
//! ```rust
//! use wmbus_drivers::{decode_hex_telegram, get_values, MeterModel};
//!
//! let telegram = [0u8; 24]; // delivered by the host radio stack
//! let values = get_values(MeterModel::Multical21, &telegram);
//! assert!(values.is_none()); // nothing decodable in an all-zero telegram
//!
//! // Convenience entry point for hosts holding hex strings:
//! let result = decode_hex_telegram("multical21", "2A442D2C998877665544332211");
//! assert!(result.is_ok());
//! ```

pub mod drivers;
pub mod error;
pub mod logging;
pub mod registers;
pub mod util;

pub use drivers::{
    get_values, manufacturer_id_to_string, parse_manufacturer_id, MeterModel, ALL_MODELS,
};
pub use error::DriverError;
pub use logging::init_logger;
pub use registers::status::ErrorFlags;
pub use registers::{FieldEncoding, MeterValues, RegisterDescriptor};

/// Decodes a telegram supplied as a hex string.
///
/// `model_name` is the driver name the host was configured with (see
/// [`MeterModel::from_name`]); the hex string may contain whitespace or
/// `|`/`_` separators as commonly found in captured telegram logs.
///
/// Returns `Ok(None)` when the telegram parsed but contained no known
/// register.
pub fn decode_hex_telegram(
    model_name: &str,
    telegram_hex: &str,
) -> Result<Option<MeterValues>, DriverError> {
    let model = MeterModel::from_name(model_name)?;
    let telegram = util::hex::parse_hex_lenient(telegram_hex)
        .map_err(|e| DriverError::InvalidHex(e.to_string()))?;
    Ok(model.decode(&telegram))
}
