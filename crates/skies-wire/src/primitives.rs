use crate::cursor::Cursor;
use crate::error::WireError;
use crate::varint::decode_varint;

// ── Primitive decoders ────────────────────────────────────────────────
//
// Stateless readers, one per wire operation. Every multi-byte number is
// little-endian. Optional scalars are preceded by a single presence byte:
// zero means absent, anything else means the value follows.
//
// ┌───────────────────┬──────────────────────────────────────────────┐
// │ Operation         │ Bytes                                        │
// ├───────────────────┼──────────────────────────────────────────────┤
// │ byte / bool       │ 1                                            │
// │ int32 / float32   │ 4                                            │
// │ varint            │ 1-10, base-128 groups, low group first       │
// │ string            │ presence, then varint length + UTF-8 bytes   │
// │ optional_int32    │ presence, then 4                             │
// │ optional_int64    │ presence, then 8                             │
// │ datetime          │ 0                                            │
// │ optional_datetime │ presence only                                │
// └───────────────────┴──────────────────────────────────────────────┘

/// Stand-in for timestamp fields.
///
/// The data files never carry real timestamps: `datetime` fields occupy
/// zero bytes and always decode to [`Timestamp::PLACEHOLDER`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const PLACEHOLDER: Self = Self(0);

    #[must_use]
    pub fn raw(self) -> i64 {
        self.0
    }
}

/// Read one raw byte.
///
/// # Errors
///
/// [`WireError::TruncatedStream`] at end of input.
pub fn read_byte(cursor: &mut Cursor<'_>) -> Result<u8, WireError> {
    let [byte] = cursor.read_array::<1>()?;
    Ok(byte)
}

/// Read a one-byte boolean; any nonzero value is `true`.
///
/// # Errors
///
/// [`WireError::TruncatedStream`] at end of input.
pub fn read_bool(cursor: &mut Cursor<'_>) -> Result<bool, WireError> {
    Ok(read_byte(cursor)? != 0)
}

/// Read a presence flag. Same encoding as [`read_bool`], separate name so
/// call sites say what the byte means.
///
/// # Errors
///
/// [`WireError::TruncatedStream`] at end of input.
pub fn read_presence(cursor: &mut Cursor<'_>) -> Result<bool, WireError> {
    read_bool(cursor)
}

/// Read a little-endian two's complement `i32`.
///
/// # Errors
///
/// [`WireError::TruncatedStream`] if fewer than 4 bytes remain.
pub fn read_i32(cursor: &mut Cursor<'_>) -> Result<i32, WireError> {
    Ok(i32::from_le_bytes(cursor.read_array()?))
}

/// Read a little-endian two's complement `i64`.
///
/// # Errors
///
/// [`WireError::TruncatedStream`] if fewer than 8 bytes remain.
pub fn read_i64(cursor: &mut Cursor<'_>) -> Result<i64, WireError> {
    Ok(i64::from_le_bytes(cursor.read_array()?))
}

/// Read a little-endian IEEE-754 single.
///
/// # Errors
///
/// [`WireError::TruncatedStream`] if fewer than 4 bytes remain.
pub fn read_f32(cursor: &mut Cursor<'_>) -> Result<f32, WireError> {
    Ok(f32::from_le_bytes(cursor.read_array()?))
}

/// Read an unsigned base-128 varint.
///
/// # Errors
///
/// - [`WireError::MalformedVarint`] after 10 continuation bytes.
/// - [`WireError::TruncatedStream`] if input ends mid-varint.
pub fn read_varint(cursor: &mut Cursor<'_>) -> Result<u64, WireError> {
    let start = cursor.position();
    let (value, consumed) = decode_varint(cursor.remaining()).map_err(|e| e.rebase(start))?;
    cursor.read(consumed)?;
    Ok(value)
}

/// Read a varint length followed by that many UTF-8 bytes, with no
/// presence byte in front.
///
/// # Errors
///
/// - Any varint error from [`read_varint`].
/// - [`WireError::TruncatedStream`] if the text is cut short.
/// - [`WireError::TextDecode`] if the bytes are not UTF-8.
pub fn read_text(cursor: &mut Cursor<'_>) -> Result<String, WireError> {
    let len = read_varint(cursor)?;
    let len = usize::try_from(len).unwrap_or(usize::MAX);
    let start = cursor.position();
    let bytes = cursor.read(len)?;
    let text = std::str::from_utf8(bytes).map_err(|source| WireError::TextDecode {
        offset: start,
        source,
    })?;
    Ok(text.to_owned())
}

/// Read a presence-prefixed string; absence decodes to the empty string.
///
/// # Errors
///
/// See [`read_text`].
pub fn read_string(cursor: &mut Cursor<'_>) -> Result<String, WireError> {
    Ok(read_optional_string(cursor)?.unwrap_or_default())
}

/// Read a presence-prefixed string, keeping absence as `None`.
///
/// # Errors
///
/// See [`read_text`].
pub fn read_optional_string(cursor: &mut Cursor<'_>) -> Result<Option<String>, WireError> {
    if read_presence(cursor)? {
        Ok(Some(read_text(cursor)?))
    } else {
        Ok(None)
    }
}

/// Read a presence byte and, if set, an `i32`.
///
/// # Errors
///
/// [`WireError::TruncatedStream`] if the flag or value is cut short.
pub fn read_optional_i32(cursor: &mut Cursor<'_>) -> Result<Option<i32>, WireError> {
    if read_presence(cursor)? {
        Ok(Some(read_i32(cursor)?))
    } else {
        Ok(None)
    }
}

/// Read a presence byte and, if set, an `i64`.
///
/// # Errors
///
/// [`WireError::TruncatedStream`] if the flag or value is cut short.
pub fn read_optional_i64(cursor: &mut Cursor<'_>) -> Result<Option<i64>, WireError> {
    if read_presence(cursor)? {
        Ok(Some(read_i64(cursor)?))
    } else {
        Ok(None)
    }
}

/// Produce the timestamp placeholder. Consumes nothing.
///
/// # Errors
///
/// Never fails; the `Result` keeps the signature uniform with the other
/// field readers.
#[allow(clippy::unnecessary_wraps)]
pub fn read_datetime(_cursor: &mut Cursor<'_>) -> Result<Timestamp, WireError> {
    Ok(Timestamp::PLACEHOLDER)
}

/// Read a presence byte; if set, yield the timestamp placeholder.
///
/// # Errors
///
/// [`WireError::TruncatedStream`] at end of input.
pub fn read_optional_datetime(cursor: &mut Cursor<'_>) -> Result<Option<Timestamp>, WireError> {
    Ok(read_presence(cursor)?.then_some(Timestamp::PLACEHOLDER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_int32_present() {
        let buf = [0x01, 0x2A, 0x00, 0x00, 0x00];
        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_optional_i32(&mut cursor).unwrap(), Some(42));
        assert_eq!(cursor.position(), 5);
    }

    #[test]
    fn optional_int32_absent_reads_one_byte() {
        let buf = [0x00, 0xFF, 0xFF];
        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_optional_i32(&mut cursor).unwrap(), None);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn int32_is_signed_little_endian() {
        let buf = [0xFE, 0xFF, 0xFF, 0xFF, 0x00, 0x01, 0x00, 0x00];
        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_i32(&mut cursor).unwrap(), -2);
        assert_eq!(read_i32(&mut cursor).unwrap(), 256);
    }

    #[test]
    fn float32_little_endian() {
        let buf = 1.5f32.to_le_bytes();
        let mut cursor = Cursor::new(&buf);
        assert!((read_f32(&mut cursor).unwrap() - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn bool_is_any_nonzero() {
        let buf = [0x00, 0x01, 0x7F];
        let mut cursor = Cursor::new(&buf);
        assert!(!read_bool(&mut cursor).unwrap());
        assert!(read_bool(&mut cursor).unwrap());
        assert!(read_bool(&mut cursor).unwrap());
    }

    #[test]
    fn optional_int64_present() {
        let mut buf = vec![0x01];
        buf.extend_from_slice(&(-5i64).to_le_bytes());
        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_optional_i64(&mut cursor).unwrap(), Some(-5));
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn string_present_and_absent() {
        let buf = [0x01, 0x05, b'A', b'l', b'b', b'i', b'n', 0x00];
        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_string(&mut cursor).unwrap(), "Albin");
        assert_eq!(read_string(&mut cursor).unwrap(), "");
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn optional_string_keeps_absence() {
        let buf = [0x00, 0x01, 0x00];
        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_optional_string(&mut cursor).unwrap(), None);
        assert_eq!(read_optional_string(&mut cursor).unwrap(), Some(String::new()));
    }

    #[test]
    fn string_with_multibyte_length() {
        let text = "x".repeat(200);
        let mut buf = vec![0x01, 0xC8, 0x01];
        buf.extend_from_slice(text.as_bytes());
        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_string(&mut cursor).unwrap(), text);
    }

    #[test]
    fn string_invalid_utf8() {
        let buf = [0x01, 0x02, 0xC3, 0x28];
        let mut cursor = Cursor::new(&buf);
        let err = read_string(&mut cursor).unwrap_err();
        assert!(matches!(err, WireError::TextDecode { offset: 2, .. }));
    }

    #[test]
    fn string_truncated_body() {
        let buf = [0x01, 0x09, b'a'];
        let mut cursor = Cursor::new(&buf);
        assert!(matches!(
            read_string(&mut cursor),
            Err(WireError::TruncatedStream { offset: 2, needed: 9, available: 1 })
        ));
    }

    #[test]
    fn varint_error_offsets_are_absolute() {
        let mut buf = vec![0x00, 0x00];
        buf.extend_from_slice(&[0x80; 12]);
        let mut cursor = Cursor::new(&buf);
        read_byte(&mut cursor).unwrap();
        read_byte(&mut cursor).unwrap();
        assert!(matches!(
            read_varint(&mut cursor),
            Err(WireError::MalformedVarint { offset: 2 })
        ));
    }

    #[test]
    fn datetime_consumes_nothing() {
        let buf = [0x01, 0x00];
        let mut cursor = Cursor::new(&buf);
        assert_eq!(read_datetime(&mut cursor).unwrap(), Timestamp::PLACEHOLDER);
        assert_eq!(cursor.position(), 0);
        assert_eq!(
            read_optional_datetime(&mut cursor).unwrap(),
            Some(Timestamp::PLACEHOLDER)
        );
        assert_eq!(read_optional_datetime(&mut cursor).unwrap(), None);
        assert!(cursor.is_exhausted());
    }
}
