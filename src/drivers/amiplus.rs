//! Apator amiplus smart electricity meter.
//!
//! Besides plain totals, this meter reports per-tariff energy registers
//! (tariffs 1..=3 widen the tag by a storage nibble, tariff 4 uses an
//! extended tag) and per-phase voltage behind a selector byte.

use crate::drivers::finish;
use crate::registers::{
    extract_with_selector, run_table, FieldEncoding, MeterValues, RegisterDescriptor,
};

const REGISTERS: &[RegisterDescriptor] = &[
    RegisterDescriptor::bcd(0x0E03, 2, 6, 1000.0, "total_energy_consumption_kwh"),
    RegisterDescriptor::bcd(0x8E1003, 3, 6, 1000.0, "total_energy_consumption_t1_kwh"),
    RegisterDescriptor::bcd(0x8E2003, 3, 6, 1000.0, "total_energy_consumption_t2_kwh"),
    RegisterDescriptor::bcd(0x8E3003, 3, 6, 1000.0, "total_energy_consumption_t3_kwh"),
    RegisterDescriptor::bcd(0x8E801003, 4, 6, 1000.0, "total_energy_consumption_t4_kwh"),
    RegisterDescriptor::bcd(0x0B2B, 2, 3, 1000.0, "current_power_consumption_kw"),
    RegisterDescriptor::bcd(0x0E833C, 3, 6, 1000.0, "total_energy_production_kwh"),
    RegisterDescriptor::bcd(0x8E10833C, 4, 6, 1000.0, "total_energy_production_t1_kwh"),
    RegisterDescriptor::bcd(0x8E20833C, 4, 6, 1000.0, "total_energy_production_t2_kwh"),
    RegisterDescriptor::bcd(0x8E30833C, 4, 6, 1000.0, "total_energy_production_t3_kwh"),
    RegisterDescriptor::bcd(0x8E8010833C, 5, 6, 1000.0, "total_energy_production_t4_kwh"),
    RegisterDescriptor::bcd(0x0BAB3C, 3, 3, 1000.0, "current_power_production_kw"),
];

/// Voltage register: tag, then a phase selector byte, then two BCD bytes
/// in volts.
const VOLTAGE: RegisterDescriptor = RegisterDescriptor {
    tag: 0x0AFDC9FC,
    tag_width: 4,
    value_width: 2,
    encoding: FieldEncoding::Bcd,
    scale: 1.0,
    field: "voltage_at_phase_v",
};

const PHASE_FIELDS: [(&str, u8); 3] = [
    ("voltage_at_phase_1_v", 1),
    ("voltage_at_phase_2_v", 2),
    ("voltage_at_phase_3_v", 3),
];

pub(crate) fn get_values(telegram: &[u8]) -> Option<MeterValues> {
    let mut values = MeterValues::new();
    run_table(telegram, REGISTERS, &mut values);

    for (field, phase) in PHASE_FIELDS {
        if let Some(value) = extract_with_selector(telegram, &VOLTAGE, phase) {
            values.insert(field.to_string(), value);
        }
    }

    finish(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::decode::encode_bcd;
    use crate::registers::scan::DATA_START;

    fn record(tag: &[u8], value: u64, width: usize) -> Vec<u8> {
        let mut bytes = tag.to_vec();
        bytes.extend_from_slice(&encode_bcd(value, width));
        bytes
    }

    #[test]
    fn test_energy_and_power_registers() {
        let mut telegram = vec![0u8; DATA_START];
        telegram.extend_from_slice(&record(&[0x0E, 0x03], 12345678, 6));
        telegram.extend_from_slice(&record(&[0x8E, 0x10, 0x03], 1111, 6));
        telegram.extend_from_slice(&record(&[0x8E, 0x80, 0x10, 0x03], 4444, 6));
        telegram.extend_from_slice(&record(&[0x0B, 0x2B], 1500, 3));
        telegram.extend_from_slice(&record(&[0x0E, 0x83, 0x3C], 987654, 6));
        telegram.extend_from_slice(&record(&[0x8E, 0x80, 0x10, 0x83, 0x3C], 2222, 6));

        let values = get_values(&telegram).unwrap();
        assert_eq!(values["total_energy_consumption_kwh"], 12345.678);
        assert_eq!(values["total_energy_consumption_t1_kwh"], 1.111);
        assert_eq!(values["total_energy_consumption_t4_kwh"], 4.444);
        assert_eq!(values["current_power_consumption_kw"], 1.5);
        assert_eq!(values["total_energy_production_kwh"], 987.654);
        assert_eq!(values["total_energy_production_t4_kwh"], 2.222);
        assert!(!values.contains_key("total_energy_consumption_t2_kwh"));
    }

    #[test]
    fn test_phase_voltages_never_mix() {
        let mut telegram = vec![0u8; DATA_START];
        telegram.extend_from_slice(&[0x0A, 0xFD, 0xC9, 0xFC, 0x01, 0x31, 0x02]); // 231 V
        telegram.extend_from_slice(&[0x0A, 0xFD, 0xC9, 0xFC, 0x03, 0x27, 0x02]); // 227 V

        let values = get_values(&telegram).unwrap();
        assert_eq!(values["voltage_at_phase_1_v"], 231.0);
        assert_eq!(values["voltage_at_phase_3_v"], 227.0);
        assert!(!values.contains_key("voltage_at_phase_2_v"));
    }
}
