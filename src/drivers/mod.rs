//! # Meter Drivers
//!
//! One module per supported meter model, dispatched through the closed
//! [`MeterModel`] enum. Each driver turns a validated, decrypted telegram
//! into a mapping of field name to physical value; a telegram in which no
//! known register is found yields `None` rather than an empty mapping, so
//! hosts can skip publishing anything for it.

pub mod amiplus;
pub mod evo868;
pub mod fhkvdataiii;
pub mod flowiq2200;
pub mod kamheat;
pub mod mkradio4a;
pub mod multical21;
pub mod munia;
pub mod rfmtx1;
pub mod sharky774;

use log::debug;

use crate::error::DriverError;
pub use crate::registers::MeterValues;

/// The set of meter models this library can decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeterModel {
    /// Apator at-wmbus-01 electricity meter ("amiplus").
    Amiplus,
    /// Maddalena EVO 868 water meter module.
    Evo868,
    /// Techem FHKV data III heat cost allocator.
    FhkvDataIii,
    /// Kamstrup flowIQ 2200 water meter.
    Flowiq2200,
    /// Kamstrup Multical heat meter ("kamheat").
    Kamheat,
    /// Techem MK Radio 4a water meter.
    Mkradio4a,
    /// Kamstrup Multical 21 water meter.
    Multical21,
    /// Weptech Munia room temperature/humidity sensor.
    Munia,
    /// B Meters RFM-TX1 water meter module.
    Rfmtx1,
    /// Diehl Sharky 774 heat meter.
    Sharky774,
}

/// Every model, in driver-name order. Useful for hosts that enumerate
/// supported drivers.
pub const ALL_MODELS: &[MeterModel] = &[
    MeterModel::Amiplus,
    MeterModel::Evo868,
    MeterModel::FhkvDataIii,
    MeterModel::Flowiq2200,
    MeterModel::Kamheat,
    MeterModel::Mkradio4a,
    MeterModel::Multical21,
    MeterModel::Munia,
    MeterModel::Rfmtx1,
    MeterModel::Sharky774,
];

impl MeterModel {
    /// Stable driver name, as used in host configuration.
    pub fn name(&self) -> &'static str {
        match self {
            MeterModel::Amiplus => "amiplus",
            MeterModel::Evo868 => "evo868",
            MeterModel::FhkvDataIii => "fhkvdataiii",
            MeterModel::Flowiq2200 => "flowiq2200",
            MeterModel::Kamheat => "kamheat",
            MeterModel::Mkradio4a => "mkradio4a",
            MeterModel::Multical21 => "multical21",
            MeterModel::Munia => "munia",
            MeterModel::Rfmtx1 => "rfmtx1",
            MeterModel::Sharky774 => "sharky774",
        }
    }

    /// Looks up a model by its driver name (case-insensitive).
    pub fn from_name(name: &str) -> Result<MeterModel, DriverError> {
        let lowered = name.to_ascii_lowercase();
        ALL_MODELS
            .iter()
            .copied()
            .find(|model| model.name() == lowered)
            .ok_or_else(|| DriverError::UnknownModel(name.to_string()))
    }

    /// Selects a model from the manufacturer/version/device-type triple the
    /// host reads out of the telegram header.
    ///
    /// Only the triples known from the upstream driver detection lists are
    /// mapped; everything else needs explicit configuration via
    /// [`MeterModel::from_name`].
    pub fn detect(manufacturer: &str, version: u8, device_type: u8) -> Option<MeterModel> {
        match (manufacturer, version, device_type) {
            ("MAD", 0x50, 0x06 | 0x07 | 0x16) => Some(MeterModel::Evo868),
            ("WEP", 0x02 | 0x04, 0x1B) => Some(MeterModel::Munia),
            _ => None,
        }
    }

    /// Decodes one telegram with this model's driver.
    pub fn decode(&self, telegram: &[u8]) -> Option<MeterValues> {
        let values = match self {
            MeterModel::Amiplus => amiplus::get_values(telegram),
            MeterModel::Evo868 => evo868::get_values(telegram),
            MeterModel::FhkvDataIii => fhkvdataiii::get_values(telegram),
            MeterModel::Flowiq2200 => flowiq2200::get_values(telegram),
            MeterModel::Kamheat => kamheat::get_values(telegram),
            MeterModel::Mkradio4a => mkradio4a::get_values(telegram),
            MeterModel::Multical21 => multical21::get_values(telegram),
            MeterModel::Munia => munia::get_values(telegram),
            MeterModel::Rfmtx1 => rfmtx1::get_values(telegram),
            MeterModel::Sharky774 => sharky774::get_values(telegram),
        };
        debug!(
            "{}: decoded {} field(s) from {}-byte telegram",
            self.name(),
            values.as_ref().map_or(0, |v| v.len()),
            telegram.len()
        );
        values
    }
}

/// Decodes `telegram` with the driver for `model`.
///
/// Returns `None` when no known register was found; this is distinct from
/// an empty-but-present mapping, which is never produced.
pub fn get_values(model: MeterModel, telegram: &[u8]) -> Option<MeterValues> {
    model.decode(telegram)
}

/// Wraps a result map per the driver contract: something decoded means
/// `Some`, nothing decoded means `None`.
pub(crate) fn finish(values: MeterValues) -> Option<MeterValues> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}

/// Converts a 2-byte encoded manufacturer ID into its 3-letter code.
pub fn manufacturer_id_to_string(id: u16) -> String {
    let c1 = ((id >> 10) & 0x1F) as u8 + b'A' - 1;
    let c2 = ((id >> 5) & 0x1F) as u8 + b'A' - 1;
    let c3 = (id & 0x1F) as u8 + b'A' - 1;

    String::from_utf8(vec![c1, c2, c3]).unwrap_or_else(|_| format!("{id:04X}"))
}

/// Converts a 3-letter manufacturer code into its 2-byte encoded ID.
/// Returns 0 for anything that is not exactly three letters.
pub fn parse_manufacturer_id(manufacturer: &str) -> u16 {
    if manufacturer.len() != 3 {
        return 0;
    }

    let bytes = manufacturer.as_bytes();
    let c1 = (bytes[0].saturating_sub(b'A').saturating_add(1) & 0x1F) as u16;
    let c2 = (bytes[1].saturating_sub(b'A').saturating_add(1) & 0x1F) as u16;
    let c3 = (bytes[2].saturating_sub(b'A').saturating_add(1) & 0x1F) as u16;

    (c1 << 10) | (c2 << 5) | c3
}
