//! Kamstrup Multical 21 cold/warm water meter.

use crate::drivers::finish;
use crate::registers::{run_table, MeterValues, RegisterDescriptor};

const REGISTERS: &[RegisterDescriptor] = &[
    RegisterDescriptor::binary(0x0413, 2, 4, 1000.0, "total_m3"),
    RegisterDescriptor::binary(0x4413, 2, 4, 1000.0, "target_m3"),
    RegisterDescriptor::binary(0x615B, 2, 1, 1.0, "flow_temperature_c"),
    RegisterDescriptor::binary(0x6167, 2, 1, 1.0, "external_temperature_c"),
];

pub(crate) fn get_values(telegram: &[u8]) -> Option<MeterValues> {
    let mut values = MeterValues::new();
    run_table(telegram, REGISTERS, &mut values);
    finish(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::scan::DATA_START;

    #[test]
    fn test_volume_and_temperatures() {
        let mut telegram = vec![0u8; DATA_START];
        telegram.extend_from_slice(&[0x04, 0x13, 0xC9, 0x04, 0x00, 0x00]);
        telegram.extend_from_slice(&[0x44, 0x13, 0x39, 0x30, 0x00, 0x00]);
        telegram.extend_from_slice(&[0x61, 0x5B, 0x16]);
        telegram.extend_from_slice(&[0x61, 0x67, 0x14]);

        let values = get_values(&telegram).unwrap();
        assert_eq!(values["total_m3"], 1.225);
        assert_eq!(values["target_m3"], 12.345);
        assert_eq!(values["flow_temperature_c"], 22.0);
        assert_eq!(values["external_temperature_c"], 20.0);
    }

    #[test]
    fn test_empty_telegram_yields_no_data() {
        assert!(get_values(&[0u8; 32]).is_none());
        assert!(get_values(&[]).is_none());
    }
}
