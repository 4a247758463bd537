use std::ops::RangeInclusive;

// Some data files are exported still wrapped in the asset container's
// serialized-string envelope. It has no magic number, so the only way to
// recognise it is by shape.

/// Name lengths at or above this are never treated as a framing block.
pub const MAX_NAME_LEN: usize = 20;

/// Bytes accepted inside the framing block's name region (`A` through `z`).
pub const NAME_BYTES: RangeInclusive<u8> = 0x41..=0x7A;

/// A detected framing block at the front of a data file.
///
/// ```text
/// ┌────────┬──────────┬──────────────────────────────────────┐
/// │ Offset │ Size     │ Description                          │
/// ├────────┼──────────┼──────────────────────────────────────┤
/// │ 0x00   │ 4 bytes  │ name_len L (u32 LE, must be < 20)    │
/// │ 0x04   │ L bytes  │ asset name, bytes in 0x41..=0x7A     │
/// │ 4+L    │ P bytes  │ zero padding, P = (-L) mod 4         │
/// │ 4+L+P  │ 4 bytes  │ content length (u32 LE)              │
/// └────────┴──────────┴──────────────────────────────────────┘
/// ```
///
/// Detection is a heuristic, not a checked header. A payload that happens
/// to open with a small integer followed by letter-like bytes is misread
/// as framing. That false positive is accepted; in particular an empty name
/// (`L = 0`) matches any stream starting with four zero bytes and at least
/// four more bytes after them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preamble {
    /// The asset name carried in the block.
    pub name: String,

    /// Content length declared by the container. Informational only; the
    /// payload is decoded to its own structural end.
    pub content_len: u32,

    /// Total bytes occupied by the block (`4 + L + P + 4`).
    pub size: usize,
}

impl Preamble {
    /// Inspect the front of `buf` for a framing block.
    ///
    /// Returns `None` when the length prefix is too large, the padding is
    /// not all zero, a name byte falls outside [`NAME_BYTES`], or the buffer
    /// is too short to hold the complete block.
    #[must_use]
    pub fn detect(buf: &[u8]) -> Option<Self> {
        let prefix: [u8; 4] = buf.get(0..4)?.try_into().ok()?;
        let name_len = u32::from_le_bytes(prefix) as usize;
        if name_len >= MAX_NAME_LEN {
            return None;
        }

        let padding = name_len.wrapping_neg() & 3;
        let block_len = name_len + 4 + padding;
        let size = block_len + 4;
        let block = buf.get(..size)?;

        let name = &block[4..4 + name_len];
        let pad = &block[4 + name_len..block_len];
        if pad.iter().any(|&b| b != 0) || !name.iter().all(|b| NAME_BYTES.contains(b)) {
            return None;
        }

        let content: [u8; 4] = block[block_len..size].try_into().ok()?;

        Some(Self {
            name: std::str::from_utf8(name).ok()?.to_owned(),
            content_len: u32::from_le_bytes(content),
            size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn framed(name: &[u8], padding: usize, payload: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&u32::try_from(name.len()).unwrap().to_le_bytes());
        buf.extend_from_slice(name);
        buf.extend(std::iter::repeat_n(0u8, padding));
        buf.extend_from_slice(&u32::try_from(payload.len()).unwrap().to_le_bytes());
        buf.extend_from_slice(payload);
        buf
    }

    #[test]
    fn detects_aligned_name() {
        let buf = framed(b"Test", 0, &[0xAA, 0xBB]);
        let preamble = Preamble::detect(&buf).unwrap();
        assert_eq!(preamble.name, "Test");
        assert_eq!(preamble.size, 12);
        assert_eq!(preamble.content_len, 2);
        assert_eq!(&buf[preamble.size..], &[0xAA, 0xBB]);
    }

    #[test]
    fn detects_padded_name() {
        // L = 6 needs 2 padding bytes to reach the next 4-byte boundary.
        let buf = framed(b"events", 2, &[0x01]);
        let preamble = Preamble::detect(&buf).unwrap();
        assert_eq!(preamble.name, "events");
        assert_eq!(preamble.size, 4 + 6 + 2 + 4);
    }

    #[test]
    fn rejects_large_length_prefix() {
        let mut buf = framed(b"Test", 0, &[]);
        buf[0] = 20;
        assert!(Preamble::detect(&buf).is_none());
    }

    #[test]
    fn rejects_nonzero_padding() {
        let mut buf = framed(b"abc", 1, &[]);
        buf[7] = 0x01;
        assert!(Preamble::detect(&buf).is_none());
    }

    #[test]
    fn rejects_non_letter_name() {
        let buf = framed(b"Te5t", 0, &[]);
        assert!(Preamble::detect(&buf).is_none());
    }

    #[test]
    fn rejects_truncated_block() {
        let buf = framed(b"Test", 0, &[]);
        assert!(Preamble::detect(&buf[..10]).is_none());
        assert!(Preamble::detect(&[0x04, 0x00]).is_none());
    }

    #[test]
    fn raw_array_header_is_not_framing() {
        // Array of 3 records, first presence byte set.
        let buf = [0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00];
        assert!(Preamble::detect(&buf).is_none());
    }

    #[test]
    fn empty_name_is_a_known_false_positive() {
        let buf = [0u8; 8];
        let preamble = Preamble::detect(&buf).unwrap();
        assert_eq!(preamble.size, 8);
        assert!(preamble.name.is_empty());
    }
}
