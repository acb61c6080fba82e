//! Techem MK Radio 4a water meter.
//!
//! Reports a single register: the billing-date volume, as a 3-byte
//! little-endian integer in litres.

use crate::drivers::finish;
use crate::registers::{run_table, MeterValues, RegisterDescriptor};

const REGISTERS: &[RegisterDescriptor] =
    &[RegisterDescriptor::binary(0x4315, 2, 3, 1000.0, "target_water_m3")];

pub(crate) fn get_values(telegram: &[u8]) -> Option<MeterValues> {
    let mut values = MeterValues::new();
    run_table(telegram, REGISTERS, &mut values);
    finish(values)
}
