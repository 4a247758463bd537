use skies_wire::Cursor;

pub use skies_wire::primitives::{
    read_bool, read_byte, read_datetime, read_f32, read_i32, read_optional_datetime,
    read_optional_i32, read_optional_i64, read_optional_string, read_presence, read_string,
    read_varint,
};

use crate::enums::{KnownEnum, OpenEnum};
use crate::error::DecodeError;
use crate::record::RecordType;

// ── Composite field readers ───────────────────────────────────────────
//
// The generated `RecordType::decode` bodies call one function per field,
// in layout order. Scalars come straight from skies-wire; the readers
// below handle enumerations, nested records and arrays. All recursion
// into nested records goes through `read_record` so nesting depth is
// bounded in one place.

/// Maximum record nesting before decoding is abandoned.
///
/// Every nested record costs at least one flag byte, so a hostile file
/// could otherwise drive recursion as deep as its length.
pub const MAX_DEPTH: usize = 256;

/// Stack headroom below which a nested decode moves to a fresh segment.
const STACK_RED_ZONE: usize = 256 * 1024;

/// Size of each stack segment allocated for deep nesting.
const STACK_SEGMENT: usize = 4 * 1024 * 1024;

/// Read an `int32` and classify it against `E`'s named values.
///
/// # Errors
///
/// [`DecodeError::Wire`] on truncation. Unnamed values are not an error.
pub fn read_enum<E: KnownEnum>(cursor: &mut Cursor<'_>) -> Result<OpenEnum<E>, DecodeError> {
    Ok(OpenEnum::from_raw(read_i32(cursor)?))
}

/// Presence byte, then an enumeration if set.
///
/// # Errors
///
/// [`DecodeError::Wire`] on truncation.
pub fn read_optional_enum<E: KnownEnum>(
    cursor: &mut Cursor<'_>,
) -> Result<Option<OpenEnum<E>>, DecodeError> {
    if read_presence(cursor)? {
        Ok(Some(read_enum(cursor)?))
    } else {
        Ok(None)
    }
}

/// Decode a record in place, one nesting level deeper.
///
/// # Errors
///
/// [`DecodeError::NestingTooDeep`] past [`MAX_DEPTH`], otherwise whatever
/// the record's own decode raises.
pub fn read_record<R: RecordType>(cursor: &mut Cursor<'_>) -> Result<R, DecodeError> {
    let depth = cursor.descend();
    let result = if depth > MAX_DEPTH {
        Err(DecodeError::NestingTooDeep {
            offset: cursor.position(),
            depth,
        })
    } else {
        // Record frames are large in unoptimized builds; the depth bound
        // alone does not fit a 2 MiB thread stack.
        stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || R::decode(cursor))
    };
    cursor.ascend();
    result
}

/// One presence byte, then the record if set.
///
/// This is the per-element encoding inside record arrays.
///
/// # Errors
///
/// See [`read_record`].
pub fn read_object<R: RecordType>(cursor: &mut Cursor<'_>) -> Result<Option<Box<R>>, DecodeError> {
    if read_presence(cursor)? {
        Ok(Some(Box::new(read_record(cursor)?)))
    } else {
        Ok(None)
    }
}

/// Two presence bytes (field-level, then record-level), then the record
/// if both are set.
///
/// Both flags are read even when the first is zero. The second byte is
/// on the wire either way, and skipping it would misalign every field
/// after this one.
///
/// # Errors
///
/// See [`read_record`].
pub fn read_optional_object<R: RecordType>(
    cursor: &mut Cursor<'_>,
) -> Result<Option<Box<R>>, DecodeError> {
    let outer = read_presence(cursor)?;
    let inner = read_presence(cursor)?;
    if outer && inner {
        Ok(Some(Box::new(read_record(cursor)?)))
    } else {
        Ok(None)
    }
}

/// Read a signed 4-byte element count. A negative count reads as zero.
fn read_count(cursor: &mut Cursor<'_>) -> Result<usize, DecodeError> {
    let offset = cursor.position();
    let len = read_i32(cursor)?;
    Ok(usize::try_from(len).unwrap_or_else(|_| {
        tracing::debug!(offset, len, "negative element count read as empty");
        0
    }))
}

/// Count, then that many flag-prefixed records. No array-level presence
/// byte. A zero or negative count returns immediately without reading
/// element flags.
///
/// # Errors
///
/// Truncation of the count, or any element decode failure.
pub fn read_array_of_optional_object<R: RecordType>(
    cursor: &mut Cursor<'_>,
) -> Result<Vec<Option<R>>, DecodeError> {
    let count = read_count(cursor)?;
    if count == 0 {
        return Ok(Vec::new());
    }

    // Each element needs at least its flag byte, so the remaining input
    // bounds a sane allocation even when the count is garbage.
    let mut items = Vec::with_capacity(count.min(cursor.remaining().len()));
    for _ in 0..count {
        let item = if read_presence(cursor)? {
            Some(read_record(cursor)?)
        } else {
            None
        };
        items.push(item);
    }
    Ok(items)
}

/// Presence byte, then [`read_array_of_optional_object`] if set.
///
/// # Errors
///
/// See [`read_array_of_optional_object`].
pub fn read_optional_array_of_optional_object<R: RecordType>(
    cursor: &mut Cursor<'_>,
) -> Result<Option<Vec<Option<R>>>, DecodeError> {
    if read_presence(cursor)? {
        Ok(Some(read_array_of_optional_object(cursor)?))
    } else {
        Ok(None)
    }
}

/// Presence byte, then a count and that many bare `int32`s. A negative
/// count reads as an empty list.
///
/// # Errors
///
/// Truncation.
pub fn read_array_of_int32(cursor: &mut Cursor<'_>) -> Result<Option<Vec<i32>>, DecodeError> {
    if !read_presence(cursor)? {
        return Ok(None);
    }
    let count = read_count(cursor)?;
    let mut items = Vec::with_capacity(count.min(cursor.remaining().len() / 4));
    for _ in 0..count {
        items.push(read_i32(cursor)?);
    }
    Ok(Some(items))
}

/// Decode entry point of placeholder record types. Always fails.
///
/// # Errors
///
/// Always [`DecodeError::UnexpectedRecordType`].
pub fn read_invalid(cursor: &mut Cursor<'_>, record: &'static str) -> Result<(), DecodeError> {
    Err(DecodeError::UnexpectedRecordType {
        record,
        offset: cursor.position(),
    })
}
