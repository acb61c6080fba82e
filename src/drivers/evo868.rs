//! Maddalena EVO 868 wM-Bus module, mounted on water meters.

use crate::drivers::finish;
use crate::registers::{run_table, MeterValues, RegisterDescriptor};

const REGISTERS: &[RegisterDescriptor] = &[
    RegisterDescriptor::binary(0x0413, 2, 4, 1000.0, "total_m3"),
    RegisterDescriptor::binary(0x4413, 2, 4, 1000.0, "consumption_at_set_date_m3"),
    // Storage 2 copy of the billing-date volume.
    RegisterDescriptor::binary(0x840113, 3, 4, 1000.0, "consumption_at_set_date_2_m3"),
    RegisterDescriptor::binary(0xD3013B, 3, 2, 1000.0, "max_flow_since_datetime_m3h"),
    RegisterDescriptor::binary(0x04FD17, 3, 4, 1.0, "error_flags"),
];

pub(crate) fn get_values(telegram: &[u8]) -> Option<MeterValues> {
    let mut values = MeterValues::new();
    run_table(telegram, REGISTERS, &mut values);
    finish(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::status::ErrorFlags;
    use crate::util::hex::parse_hex_lenient;

    // Reference telegram from the upstream evo868 driver notes
    // ("Votchka", id 79787776).
    const TELEGRAM: &str = "aa4424347677787950077ac10000202f2f041306070000046d1e31b12104fd17000000000e787880048120004413c9040000426c9f2c840113c904000082016c9f2cd3013b9a0200c4016d0534a7218104fd280182046c9f2c840413c9040000c404131b00000084051300000000c405130000000084061300000000c406130000000084071300000000c407130000000084081300000000c408130000000084091300000000c4091300000000ffff";

    #[test]
    fn test_reference_telegram() {
        let telegram = parse_hex_lenient(TELEGRAM).unwrap();
        let values = get_values(&telegram).unwrap();

        assert_eq!(values["total_m3"], 1.798);
        assert_eq!(values["consumption_at_set_date_m3"], 1.225);
        assert_eq!(values["consumption_at_set_date_2_m3"], 1.225);
        assert_eq!(values["max_flow_since_datetime_m3h"], 0.666);
        assert!(ErrorFlags::from_value(values["error_flags"]).is_ok());
    }
}
