//! Kamstrup flowIQ 2200 water meter.
//!
//! The meter alternates between two frame layouts, distinguished by the
//! TPL-CI byte: a full frame with scannable registers and a compact frame
//! with fixed-offset values.

use log::debug;

use crate::drivers::finish;
use crate::registers::{read_le_at, run_table, MeterValues, RegisterDescriptor};

/// Offset of the TPL-CI field in the telegrams this driver sees.
const TPL_CI_OFFSET: usize = 19;

/// Frame layout selected by the TPL-CI discriminant byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FrameLayout {
    /// CI 0x78: full records, registers found by tag scan.
    Full,
    /// CI 0x79: compact frame, values at fixed offsets.
    Compact,
}

impl FrameLayout {
    fn from_telegram(telegram: &[u8]) -> Option<FrameLayout> {
        match telegram.get(TPL_CI_OFFSET)? {
            0x78 => Some(FrameLayout::Full),
            0x79 => Some(FrameLayout::Compact),
            ci => {
                debug!("flowiq2200: unhandled TPL-CI 0x{ci:02X}");
                None
            }
        }
    }
}

const FULL_FRAME_REGISTERS: &[RegisterDescriptor] = &[
    RegisterDescriptor::binary(0x0413, 2, 4, 1000.0, "total_water_m3"),
    RegisterDescriptor::binary(0x4413, 2, 4, 1000.0, "target_water_m3"),
    RegisterDescriptor::binary(0x04FF23, 3, 4, 1.0, "error_flags"),
];

// Compact frame value positions.
const COMPACT_TARGET_OFFSET: usize = 11;
const COMPACT_TOTAL_OFFSET: usize = 29;

pub(crate) fn get_values(telegram: &[u8]) -> Option<MeterValues> {
    let mut values = MeterValues::new();

    match FrameLayout::from_telegram(telegram)? {
        FrameLayout::Full => {
            run_table(telegram, FULL_FRAME_REGISTERS, &mut values);
        }
        FrameLayout::Compact => {
            if let Some(raw) = read_le_at(telegram, COMPACT_TOTAL_OFFSET, 4) {
                values.insert("total_water_m3".to_string(), raw as f64 / 1000.0);
            }
            if let Some(raw) = read_le_at(telegram, COMPACT_TARGET_OFFSET, 4) {
                values.insert("target_water_m3".to_string(), raw as f64 / 1000.0);
            }
        }
    }

    finish(values)
}
