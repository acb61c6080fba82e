//! B Meters RFM-TX1 water meter module.
//!
//! The total volume is transmitted obfuscated: six bytes at offset 15 are
//! XOR-combined with the serial byte at offset 11 and a per-meter static
//! vector selected by that byte's low nibble. The decoded bytes 2..6 hold
//! the total as packed BCD in litres. Only telegrams whose TPL
//! configuration word is 0x1006 use this scheme.

use log::trace;

use crate::drivers::finish;
use crate::registers::decode::decode_bcd;
use crate::registers::{read_le_at, MeterValues};

const TPL_CFG_OFFSET: usize = 13;
const OBFUSCATED_TPL_CFG: u16 = 0x1006;

const KEY_BYTE_OFFSET: usize = 0x0B;
const TOTAL_OFFSET: usize = 0x0F;

/// Per-nibble XOR vectors, fixed in the meter firmware.
const DECODE_VECTORS: [[u8; 6]; 16] = [
    [117, 150, 122, 16, 26, 10],
    [91, 127, 112, 19, 34, 19],
    [179, 24, 185, 11, 142, 153],
    [142, 125, 121, 7, 74, 22],
    [181, 145, 7, 154, 203, 105],
    [184, 163, 50, 161, 57, 14],
    [189, 128, 156, 126, 96, 153],
    [39, 92, 180, 196, 128, 163],
    [48, 208, 10, 206, 25, 3],
    [194, 76, 240, 5, 165, 134],
    [84, 75, 22, 152, 17, 94],
    [75, 238, 12, 201, 125, 162],
    [135, 202, 74, 72, 228, 31],
    [196, 135, 119, 46, 138, 232],
    [227, 48, 189, 120, 87, 140],
    [164, 154, 57, 111, 40, 5],
];

pub(crate) fn get_values(telegram: &[u8]) -> Option<MeterValues> {
    let mut values = MeterValues::new();

    if let Some(total) = decode_total(telegram) {
        values.insert("total_water_m3".to_string(), total);
    }

    finish(values)
}

fn decode_total(telegram: &[u8]) -> Option<f64> {
    let tpl_cfg = read_le_at(telegram, TPL_CFG_OFFSET, 2)? as u16;
    if tpl_cfg != OBFUSCATED_TPL_CFG {
        trace!("rfmtx1: unexpected tpl cfg 0x{tpl_cfg:04X}");
        return None;
    }

    let key = *telegram.get(KEY_BYTE_OFFSET)?;
    let vector = &DECODE_VECTORS[(key & 0x0F) as usize];

    let mut decoded = [0u8; 6];
    for (i, slot) in decoded.iter_mut().enumerate() {
        *slot = telegram.get(TOTAL_OFFSET + i)? ^ key ^ vector[i];
    }

    let (_, litres) = decode_bcd(&decoded[2..], 4).ok()?;
    Some(litres as f64 / 1000.0)
}
