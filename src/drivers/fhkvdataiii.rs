//! Techem FHKV data III heat cost allocator.
//!
//! This device does not use scannable register tags; its fields sit at
//! fixed offsets in the proprietary payload. The temperature block shifts
//! by one byte on DLL version 0x94 firmware, read from offset 8.

use crate::drivers::finish;
use crate::registers::{read_le_at, MeterValues};

const DLL_VERSION_OFFSET: usize = 8;
const SHIFTED_DLL_VERSION: u8 = 0x94;

const PREVIOUS_HCA_OFFSET: usize = 14;
const CURRENT_HCA_OFFSET: usize = 18;
const TEMP_ROOM_OFFSET: usize = 20;
const TEMP_RADIATOR_OFFSET: usize = 22;

pub(crate) fn get_values(telegram: &[u8]) -> Option<MeterValues> {
    let mut values = MeterValues::new();

    if let Some(raw) = read_le_at(telegram, CURRENT_HCA_OFFSET, 2) {
        values.insert("current_hca".to_string(), raw as f64);
    }
    if let Some(raw) = read_le_at(telegram, PREVIOUS_HCA_OFFSET, 2) {
        values.insert("previous_hca".to_string(), raw as f64);
    }

    let shift = match telegram.get(DLL_VERSION_OFFSET) {
        Some(&SHIFTED_DLL_VERSION) => 1,
        _ => 0,
    };
    if let Some(raw) = read_le_at(telegram, TEMP_ROOM_OFFSET + shift, 2) {
        values.insert("temp_room_c".to_string(), raw as f64 / 100.0);
    }
    if let Some(raw) = read_le_at(telegram, TEMP_RADIATOR_OFFSET + shift, 2) {
        values.insert("temp_radiator_c".to_string(), raw as f64 / 100.0);
    }

    finish(values)
}
