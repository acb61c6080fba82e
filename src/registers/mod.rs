//! # Register Descriptors and Extraction
//!
//! The common decode pattern shared by every driver: look for a register tag
//! in the telegram, read a fixed-width value behind it, divide by the
//! descriptor's scale. A meter model is then just a table of descriptors
//! plus, for a few vendors, bespoke hooks layered on the same primitives.

pub mod decode;
pub mod scan;
pub mod status;

use std::collections::HashMap;

use log::trace;

/// How the value bytes behind a tag are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEncoding {
    /// Little-endian unsigned integer.
    BinaryLe,
    /// Packed BCD, two decimal digits per byte.
    Bcd,
}

/// One register a driver knows how to extract.
///
/// `tag` is compared big-endian over `tag_width` bytes; `value_width` bytes
/// after the tag hold the raw integer; the physical value is
/// `raw / scale`, stored under `field`.
#[derive(Debug, Clone, Copy)]
pub struct RegisterDescriptor {
    pub tag: u64,
    pub tag_width: usize,
    pub value_width: usize,
    pub encoding: FieldEncoding,
    pub scale: f64,
    pub field: &'static str,
}

impl RegisterDescriptor {
    /// Descriptor for a little-endian binary register.
    pub const fn binary(
        tag: u64,
        tag_width: usize,
        value_width: usize,
        scale: f64,
        field: &'static str,
    ) -> Self {
        RegisterDescriptor {
            tag,
            tag_width,
            value_width,
            encoding: FieldEncoding::BinaryLe,
            scale,
            field,
        }
    }

    /// Descriptor for a packed-BCD register.
    pub const fn bcd(
        tag: u64,
        tag_width: usize,
        value_width: usize,
        scale: f64,
        field: &'static str,
    ) -> Self {
        RegisterDescriptor {
            tag,
            tag_width,
            value_width,
            encoding: FieldEncoding::Bcd,
            scale,
            field,
        }
    }
}

/// Result mapping of one telegram decode: field name to physical value.
pub type MeterValues = HashMap<String, f64>;

/// Scans for the descriptor's tag and decodes the value behind it.
///
/// `None` means "field not present in this telegram": either the tag never
/// occurs or the telegram is too short for the value bytes. Neither case is
/// an error; meters legitimately vary in which registers they populate.
pub fn extract(telegram: &[u8], desc: &RegisterDescriptor) -> Option<f64> {
    let pos = scan::find_tag(telegram, scan::DATA_START, desc.tag, desc.tag_width)?;
    decode_at(telegram, pos + desc.tag_width, desc)
}

/// Selector-gated variant of [`extract`] for tariff- or phase-indexed
/// registers: the byte after the tag must equal `selector`, and the value
/// bytes follow the selector.
pub fn extract_with_selector(
    telegram: &[u8],
    desc: &RegisterDescriptor,
    selector: u8,
) -> Option<f64> {
    let pos = scan::find_tag_with_selector(
        telegram,
        scan::DATA_START,
        desc.tag,
        desc.tag_width,
        selector,
    )?;
    decode_at(telegram, pos + desc.tag_width + 1, desc)
}

fn decode_at(telegram: &[u8], value_pos: usize, desc: &RegisterDescriptor) -> Option<f64> {
    let input = telegram.get(value_pos..)?;
    let raw = match desc.encoding {
        FieldEncoding::BinaryLe => decode::decode_le_uint(input, desc.value_width).ok()?.1,
        FieldEncoding::Bcd => decode::decode_bcd(input, desc.value_width).ok()?.1,
    };
    let value = raw as f64 / desc.scale;
    trace!(
        "register {tag:0width$X}: raw {raw} -> {value} ({field})",
        tag = desc.tag,
        width = desc.tag_width * 2,
        field = desc.field,
    );
    Some(value)
}

/// Runs a descriptor table against a telegram, inserting every value found.
///
/// When two descriptors target the same field name, the first one that
/// produces a value wins; later descriptors for that field are ignored.
pub fn run_table(telegram: &[u8], table: &[RegisterDescriptor], values: &mut MeterValues) {
    for desc in table {
        if let Some(value) = extract(telegram, desc) {
            values.entry(desc.field.to_string()).or_insert(value);
        }
    }
}

/// Reads a little-endian unsigned integer at a fixed telegram offset.
///
/// Used by the frame-layout drivers whose fields sit at known positions
/// instead of behind a scannable tag.
pub fn read_le_at(telegram: &[u8], offset: usize, width: usize) -> Option<u64> {
    let input = telegram.get(offset..)?;
    decode::decode_le_uint(input, width).ok().map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn telegram_with(payload: &[u8]) -> Vec<u8> {
        let mut telegram = vec![0u8; scan::DATA_START];
        telegram.extend_from_slice(payload);
        telegram
    }

    #[test]
    fn test_extract_binary_register() {
        let desc = RegisterDescriptor::binary(0x0413, 2, 4, 1000.0, "total_m3");
        let telegram = telegram_with(&[0x04, 0x13, 0xC9, 0x04, 0x00, 0x00]);

        assert_eq!(extract(&telegram, &desc), Some(1.225));
    }

    #[test]
    fn test_extract_bcd_register() {
        let desc = RegisterDescriptor::bcd(0x0C13, 2, 4, 1000.0, "total_volume_m3");
        let telegram = telegram_with(&[0x0C, 0x13, 0x25, 0x12, 0x00, 0x00]);

        assert_eq!(extract(&telegram, &desc), Some(1.225));
    }

    #[test]
    fn test_truncated_value_is_absent() {
        let desc = RegisterDescriptor::binary(0x0413, 2, 4, 1000.0, "total_m3");
        let telegram = telegram_with(&[0x04, 0x13, 0xC9, 0x04]);

        assert_eq!(extract(&telegram, &desc), None);
    }

    #[test]
    fn test_first_successful_descriptor_wins() {
        let table = [
            RegisterDescriptor::binary(0x0413, 2, 4, 1000.0, "total_m3"),
            RegisterDescriptor::binary(0x4413, 2, 4, 1.0, "total_m3"),
        ];
        let telegram = telegram_with(&[
            0x04, 0x13, 0xC9, 0x04, 0x00, 0x00, // 1.225
            0x44, 0x13, 0x01, 0x00, 0x00, 0x00, // would be 1.0
        ]);

        let mut values = MeterValues::new();
        run_table(&telegram, &table, &mut values);
        assert_eq!(values.get("total_m3"), Some(&1.225));
    }

    #[test]
    fn test_selector_routing() {
        let desc = RegisterDescriptor::bcd(0x0AFDC9FC, 4, 2, 1.0, "voltage_v");
        let mut telegram = telegram_with(&[0x0A, 0xFD, 0xC9, 0xFC, 0x01, 0x31, 0x02]);
        telegram.extend_from_slice(&[0x0A, 0xFD, 0xC9, 0xFC, 0x02, 0x28, 0x02]);

        assert_eq!(extract_with_selector(&telegram, &desc, 1), Some(231.0));
        assert_eq!(extract_with_selector(&telegram, &desc, 2), Some(228.0));
        assert_eq!(extract_with_selector(&telegram, &desc, 3), None);
    }

    #[test]
    fn test_read_le_at_bounds() {
        let telegram = telegram_with(&[0x56, 0x85, 0x00, 0x00]);
        assert_eq!(read_le_at(&telegram, 11, 4), Some(0x8556));
        assert_eq!(read_le_at(&telegram, 13, 4), None);
        assert_eq!(read_le_at(&telegram, 100, 2), None);
    }
}
