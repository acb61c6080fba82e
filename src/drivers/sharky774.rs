//! Diehl Sharky 774 heat meter.
//!
//! All registers on this meter are packed BCD.

use crate::drivers::finish;
use crate::registers::{run_table, MeterValues, RegisterDescriptor};

const REGISTERS: &[RegisterDescriptor] = &[
    RegisterDescriptor::bcd(0x0C0E, 2, 4, 1000.0, "total_energy_consumption_gj"),
    RegisterDescriptor::bcd(0x0C2B, 2, 4, 1000.0, "power_kw"),
    RegisterDescriptor::bcd(0x0C13, 2, 4, 1000.0, "total_volume_m3"),
    RegisterDescriptor::bcd(0x0B3B, 2, 3, 1.0, "volume_flow_lh"),
    RegisterDescriptor::bcd(0x0A5A, 2, 2, 10.0, "flow_temperature_c"),
    RegisterDescriptor::bcd(0x0A5E, 2, 2, 10.0, "return_temperature_c"),
    // Operating hours register, reported in days.
    RegisterDescriptor::bcd(0x0B26, 2, 3, 24.0, "operating_time_d"),
];

pub(crate) fn get_values(telegram: &[u8]) -> Option<MeterValues> {
    let mut values = MeterValues::new();
    run_table(telegram, REGISTERS, &mut values);
    finish(values)
}
