//! Kamstrup Multical heat meter ("kamheat").
//!
//! Alternates between a long frame (L-field 0x40, TPL-CI 0x78) carrying the
//! full record set and a compact frame (L-field 0x31, TPL-CI 0x79, EN
//! 13757-3 compact profile without a TPL header) carrying a subset at
//! shifted positions. Both layouts place their values at fixed offsets; the
//! energy and volume totals additionally appear behind scannable tags.

use log::debug;

use crate::drivers::finish;
use crate::registers::{read_le_at, run_table, MeterValues, RegisterDescriptor};

const L_FIELD_OFFSET: usize = 0;
const TPL_CI_OFFSET: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameLayout {
    Long,
    Compact,
}

impl FrameLayout {
    fn from_telegram(telegram: &[u8]) -> Option<FrameLayout> {
        let l_field = *telegram.get(L_FIELD_OFFSET)?;
        let tpl_ci = *telegram.get(TPL_CI_OFFSET)?;
        match (l_field, tpl_ci) {
            (0x40, 0x78) => Some(FrameLayout::Long),
            (0x31, 0x79) => Some(FrameLayout::Compact),
            _ => {
                debug!("kamheat: unhandled frame (L 0x{l_field:02X}, CI 0x{tpl_ci:02X})");
                None
            }
        }
    }
}

const REGISTERS: &[RegisterDescriptor] = &[
    RegisterDescriptor::binary(0x0406, 2, 4, 1.0, "total_energy_consumption_kwh"),
    RegisterDescriptor::binary(0x0414, 2, 4, 100.0, "total_volume_m3"),
];

// Long frame fixed offsets.
const LONG_FORWARD_ENERGY_OFFSET: usize = 29;
const LONG_RETURN_ENERGY_OFFSET: usize = 36;
const LONG_VOLUME_FLOW_OFFSET: usize = 53;
const LONG_FLOW_TEMP_OFFSET: usize = 59;
const LONG_RETURN_TEMP_OFFSET: usize = 63;

// Compact frame fixed offsets.
const COMPACT_VOLUME_FLOW_OFFSET: usize = 42;
const COMPACT_FLOW_TEMP_OFFSET: usize = 46;
const COMPACT_RETURN_TEMP_OFFSET: usize = 48;

pub(crate) fn get_values(telegram: &[u8]) -> Option<MeterValues> {
    let mut values = MeterValues::new();

    match FrameLayout::from_telegram(telegram)? {
        FrameLayout::Long => {
            if let Some(raw) = read_le_at(telegram, LONG_FORWARD_ENERGY_OFFSET, 4) {
                values.insert("total_forward_energy_m3c".to_string(), raw as f64);
            }
            if let Some(raw) = read_le_at(telegram, LONG_RETURN_ENERGY_OFFSET, 4) {
                values.insert("total_return_energy_m3c".to_string(), raw as f64);
            }
            if let Some(raw) = read_le_at(telegram, LONG_VOLUME_FLOW_OFFSET, 4) {
                values.insert("volume_flow_lh".to_string(), raw as f64);
            }
            if let Some(raw) = read_le_at(telegram, LONG_FLOW_TEMP_OFFSET, 2) {
                values.insert("flow_temperature_c".to_string(), raw as f64 / 100.0);
            }
            if let Some(raw) = read_le_at(telegram, LONG_RETURN_TEMP_OFFSET, 2) {
                values.insert("return_temperature_c".to_string(), raw as f64 / 100.0);
            }
        }
        FrameLayout::Compact => {
            if let Some(raw) = read_le_at(telegram, COMPACT_VOLUME_FLOW_OFFSET, 4) {
                values.insert("volume_flow_lh".to_string(), raw as f64);
            }
            if let Some(raw) = read_le_at(telegram, COMPACT_FLOW_TEMP_OFFSET, 2) {
                values.insert("flow_temperature_c".to_string(), raw as f64 / 100.0);
            }
            if let Some(raw) = read_le_at(telegram, COMPACT_RETURN_TEMP_OFFSET, 2) {
                values.insert("return_temperature_c".to_string(), raw as f64 / 100.0);
            }
        }
    }

    run_table(telegram, REGISTERS, &mut values);

    finish(values)
}
