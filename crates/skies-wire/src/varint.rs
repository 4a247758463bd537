use crate::error::WireError;

/// Maximum number of bytes a u64 varint can occupy.
/// ceil(64 / 7) = 10 bytes.
pub const MAX_VARINT_BYTES: usize = 10;

/// Encode a `u64` value as a base-128 varint into the provided buffer.
///
/// The data files are never written by this workspace; the encoder exists
/// so fixtures and fuzz round-trips can produce byte-exact length prefixes.
///
/// # Returns
///
/// The number of bytes written (1–10).
///
/// # Panics
///
/// Panics if `buf` is shorter than the required encoding length.
/// A 10-byte buffer is always sufficient for any `u64`.
///
/// # Wire format examples
///
/// | Value   | Encoded bytes        | Length |
/// |---------|----------------------|--------|
/// | 0       | `[0x00]`             | 1      |
/// | 127     | `[0x7F]`             | 1      |
/// | 128     | `[0x80, 0x01]`       | 2      |
/// | 300     | `[0xAC, 0x02]`       | 2      |
/// | 624485  | `[0xE5, 0x8E, 0x26]` | 3      |
pub fn encode_varint(mut value: u64, buf: &mut [u8]) -> usize {
    let mut i = 0;
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;

        if value > 0 {
            byte |= 0x80;
        }

        buf[i] = byte;
        i += 1;

        if value == 0 {
            break;
        }
    }
    i
}

/// Decode a base-128 varint from the front of `buf`.
///
/// Each byte contributes its low 7 bits, least significant group first;
/// a set high bit means another byte follows.
///
/// # Returns
///
/// `(decoded_value, bytes_consumed)` on success.
///
/// # Errors
///
/// - [`WireError::MalformedVarint`] if ten bytes pass without a
///   terminating byte. Offsets are relative to `buf`.
/// - [`WireError::TruncatedStream`] if the slice ends mid-varint.
pub fn decode_varint(buf: &[u8]) -> Result<(u64, usize), WireError> {
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    for (i, &byte) in buf.iter().enumerate() {
        if i >= MAX_VARINT_BYTES {
            return Err(WireError::MalformedVarint { offset: 0 });
        }

        result |= u64::from(byte & 0x7F) << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            return Ok((result, i + 1));
        }
    }

    Err(WireError::TruncatedStream {
        offset: buf.len(),
        needed: 1,
        available: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: u64) -> Vec<u8> {
        let mut buf = [0u8; MAX_VARINT_BYTES];
        let len = encode_varint(value, &mut buf);
        buf[..len].to_vec()
    }

    #[test]
    fn decode_three_byte_literal() {
        let (value, consumed) = decode_varint(&[0xE5, 0x8E, 0x26]).unwrap();
        assert_eq!(value, 624_485);
        assert_eq!(consumed, 3);
    }

    #[test]
    fn encode_matches_literal() {
        assert_eq!(encode(624_485), vec![0xE5, 0x8E, 0x26]);
        assert_eq!(encode(0), vec![0x00]);
        assert_eq!(encode(128), vec![0x80, 0x01]);
    }

    #[test]
    fn roundtrip_up_to_35_bits() {
        // Walk [0, 2^35) with a stride that hits every group boundary.
        let mut value: u64 = 0;
        while value < (1 << 35) {
            let encoded = encode(value);
            let (decoded, consumed) = decode_varint(&encoded).unwrap();
            assert_eq!(decoded, value, "roundtrip failed for {value}");
            assert_eq!(consumed, encoded.len());
            value = value * 3 + 1;
        }
        for bits in 0..35 {
            let edge = (1u64 << bits) - 1;
            let (decoded, _) = decode_varint(&encode(edge)).unwrap();
            assert_eq!(decoded, edge);
        }
    }

    #[test]
    fn decode_leaves_trailing_bytes() {
        let (value, consumed) = decode_varint(&[0xAC, 0x02, 0xFF, 0xFF]).unwrap();
        assert_eq!(value, 300);
        assert_eq!(consumed, 2);
    }

    #[test]
    fn decode_empty_input() {
        let result = decode_varint(&[]);
        assert!(matches!(
            result,
            Err(WireError::TruncatedStream { offset: 0, .. })
        ));
    }

    #[test]
    fn decode_truncated_varint() {
        let result = decode_varint(&[0x80, 0x80]);
        assert!(matches!(
            result,
            Err(WireError::TruncatedStream { offset: 2, .. })
        ));
    }

    #[test]
    fn decode_never_terminating() {
        let buf = [0xFF; 32];
        let result = decode_varint(&buf);
        assert!(matches!(result, Err(WireError::MalformedVarint { offset: 0 })));
    }
}
