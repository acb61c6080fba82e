//! Weptech Munia room temperature/humidity sensor.

use crate::drivers::finish;
use crate::registers::{run_table, MeterValues, RegisterDescriptor};

const REGISTERS: &[RegisterDescriptor] = &[
    RegisterDescriptor::bcd(0x0A66, 2, 2, 10.0, "current_temperature_c"),
    RegisterDescriptor::bcd(0x0AFB1A, 3, 2, 10.0, "current_relative_humidity_rh"),
    // Reports OK when no error bit is set.
    RegisterDescriptor::binary(0x02FD971D, 4, 2, 1.0, "error_flags"),
];

pub(crate) fn get_values(telegram: &[u8]) -> Option<MeterValues> {
    let mut values = MeterValues::new();
    run_table(telegram, REGISTERS, &mut values);
    finish(values)
}
