//! # Register Field Decoding
//!
//! Low-level decoding primitives for the value bytes that follow a matched
//! register tag: little-endian unsigned integers and packed BCD, in the
//! widths that actually occur in meter telegrams.

use nom::{bytes::complete::take, combinator::map, IResult};

/// Decodes a little-endian unsigned integer of 1, 2, 3, 4, or 6 bytes.
///
/// Meters transmit value bytes least-significant first. The 6-byte width
/// covers the large energy totalizers; their scaled physical value still
/// fits comfortably in an f64.
pub fn decode_le_uint(input: &[u8], size: usize) -> IResult<&[u8], u64> {
    match size {
        1 | 2 | 3 | 4 | 6 => map(take(size), |bytes: &[u8]| {
            let mut value = 0u64;
            for (i, &byte) in bytes.iter().enumerate() {
                value |= (byte as u64) << (i * 8);
            }
            value
        })(input),
        _ => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

/// Decodes a packed BCD value of `len` bytes.
///
/// Each byte carries two decimal digits (high nibble = tens, low nibble =
/// units); bytes are ordered least-significant first, so byte `i` contributes
/// with place value `100^i`:
///
/// ```text
/// value = Σ over i in [0, len) of (10 * hi(byte_i) + lo(byte_i)) * 100^i
/// ```
pub fn decode_bcd(input: &[u8], len: usize) -> IResult<&[u8], u64> {
    let (rest, bytes) = take(len)(input)?;

    let mut value = 0u64;
    let mut place = 1u64;
    for &byte in bytes {
        let digits = (10 * (byte >> 4) + (byte & 0x0F)) as u64;
        value += digits * place;
        place = place.saturating_mul(100);
    }

    Ok((rest, value))
}

/// Encodes an unsigned integer as `len` bytes of packed BCD, inverse of
/// [`decode_bcd`]. Used by tests to build telegram fixtures.
pub fn encode_bcd(mut value: u64, len: usize) -> Vec<u8> {
    let mut result = vec![0u8; len];

    for slot in result.iter_mut() {
        let units = (value % 10) as u8;
        value /= 10;
        let tens = (value % 10) as u8;
        value /= 10;
        *slot = (tens << 4) | units;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_le_uint_widths() {
        let input = &[0xC9, 0x04, 0x00, 0x00];
        let (rest, value) = decode_le_uint(input, 4).unwrap();
        assert_eq!(value, 0x04C9);
        assert!(rest.is_empty());

        let (_, value) = decode_le_uint(&[0x2A], 1).unwrap();
        assert_eq!(value, 42);

        let (_, value) = decode_le_uint(&[0x34, 0x12, 0x00], 3).unwrap();
        assert_eq!(value, 0x1234);

        let (_, value) = decode_le_uint(&[1, 0, 0, 0, 0, 1], 6).unwrap();
        assert_eq!(value, 0x0100_0000_0001);
    }

    #[test]
    fn test_decode_le_uint_rejects_bad_width() {
        assert!(decode_le_uint(&[0; 8], 5).is_err());
        assert!(decode_le_uint(&[0; 8], 0).is_err());
    }

    #[test]
    fn test_decode_le_uint_short_input() {
        assert!(decode_le_uint(&[0x01, 0x02], 4).is_err());
    }

    #[test]
    fn test_decode_bcd_place_values() {
        // byte 0 = units/tens, byte 1 = hundreds/thousands, ...
        let (_, value) = decode_bcd(&[0x25, 0x12, 0x00, 0x00], 4).unwrap();
        assert_eq!(value, 1225);

        let (_, value) = decode_bcd(&[0x78, 0x56, 0x34, 0x12], 4).unwrap();
        assert_eq!(value, 12345678);

        // 6-byte totalizer
        let (_, value) = decode_bcd(&[0x01, 0x00, 0x00, 0x00, 0x00, 0x99], 6).unwrap();
        assert_eq!(value, 990000000001);
    }

    #[test]
    fn test_decode_bcd_with_remainder() {
        let input = &[0x42, 0x00, 0xFF];
        let (rest, value) = decode_bcd(input, 2).unwrap();
        assert_eq!(value, 42);
        assert_eq!(rest, &[0xFF]);
    }

    #[test]
    fn test_decode_bcd_short_input() {
        assert!(decode_bcd(&[0x12], 4).is_err());
    }

    #[test]
    fn test_encode_bcd_round_trip() {
        assert_eq!(encode_bcd(1225, 4), vec![0x25, 0x12, 0x00, 0x00]);

        for value in [0u64, 1, 42, 99, 1225, 999999, 12345678] {
            let encoded = encode_bcd(value, 4);
            let (_, decoded) = decode_bcd(&encoded, 4).unwrap();
            assert_eq!(decoded, value, "round trip failed for {value}");
        }
    }
}
