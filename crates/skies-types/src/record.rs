use std::fmt;

use skies_wire::{Cursor, Timestamp};

use crate::enums::{KnownEnum, OpenEnum};
use crate::error::DecodeError;
use crate::layout::RecordSchema;

/// Read-only view of a decoded record.
///
/// Object safe, so heterogeneous collections (a dataset of any record
/// type, the elements of a nested array) can be walked without knowing
/// the concrete struct. Field access goes by declared name, the same name
/// the layout table uses.
pub trait Record: fmt::Debug {
    /// The layout this record was declared with.
    fn schema(&self) -> &'static RecordSchema;

    /// Borrow one field by declared name. `None` if the record type has
    /// no such field.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;

    /// Record type name.
    fn type_name(&self) -> &'static str {
        self.schema().name
    }

    /// Every field in wire order.
    fn fields(&self) -> Vec<(&'static str, FieldValue<'_>)> {
        self.schema()
            .fields
            .iter()
            .filter_map(|f| self.field(f.name).map(|v| (f.name, v)))
            .collect()
    }
}

/// A record type that can be decoded from a stream.
///
/// There are two ways to build an instance:
///
///   - [`decode`](Self::decode) reads every field in layout order from a
///     cursor. Nothing is skipped or defaulted once decoding starts.
///   - [`Default::default`] builds a blank instance without touching any
///     stream: zero, `false` or empty string for scalars, an empty list
///     for every array field (optional or not), and `None` for optional
///     scalars and nested records.
pub trait RecordType: Record + Default + Sized + 'static {
    const SCHEMA: &'static RecordSchema;

    /// Decode one record whose first field starts at the cursor.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`]; the cursor is left wherever the failing field
    /// stopped.
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError>;
}

/// Borrowed, type-erased value of one record field.
#[derive(Clone, Debug)]
pub enum FieldValue<'a> {
    /// Absent optional value or placeholder-typed field.
    Null,
    Bool(bool),
    Byte(u8),
    Int(i64),
    Unsigned(u64),
    Float(f32),
    Text(&'a str),
    Timestamp(Timestamp),
    Enum {
        enum_name: &'static str,
        variant: Option<&'static str>,
        raw: i32,
    },
    Record(&'a dyn Record),
    /// Array of optional records; `None` entries were flagged absent.
    Records(Vec<Option<&'a dyn Record>>),
    Ints(&'a [i32]),
}

impl<'a> FieldValue<'a> {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Whether this is the zero value a blank record carries.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Byte(b) => *b == 0,
            Self::Int(i) => *i == 0,
            Self::Unsigned(u) => *u == 0,
            Self::Float(f) => *f == 0.0,
            Self::Text(s) => s.is_empty(),
            Self::Timestamp(t) => *t == Timestamp::PLACEHOLDER,
            Self::Enum { raw, .. } => *raw == 0,
            Self::Record(_) => false,
            Self::Records(items) => items.is_empty(),
            Self::Ints(items) => items.is_empty(),
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Byte(b) => Some(i64::from(*b)),
            Self::Enum { raw, .. } => Some(i64::from(*raw)),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(s) => Some(*s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&'a dyn Record> {
        match self {
            Self::Record(r) => Some(*r),
            _ => None,
        }
    }
}

/// Conversion from a concrete field type to a [`FieldValue`].
///
/// Implemented for exactly the Rust types the layout operations map to.
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for () {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Null
    }
}

impl AsFieldValue for u8 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Byte(*self)
    }
}

impl AsFieldValue for bool {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl AsFieldValue for i32 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Int(i64::from(*self))
    }
}

impl AsFieldValue for u64 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Unsigned(*self)
    }
}

impl AsFieldValue for f32 {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Float(*self)
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(self)
    }
}

impl AsFieldValue for Option<String> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_deref().map_or(FieldValue::Null, FieldValue::Text)
    }
}

impl AsFieldValue for Option<i32> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.map_or(FieldValue::Null, |v| FieldValue::Int(i64::from(v)))
    }
}

impl AsFieldValue for Option<i64> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.map_or(FieldValue::Null, FieldValue::Int)
    }
}

impl AsFieldValue for Timestamp {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(*self)
    }
}

impl AsFieldValue for Option<Timestamp> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.map_or(FieldValue::Null, FieldValue::Timestamp)
    }
}

impl<E: KnownEnum> AsFieldValue for OpenEnum<E> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Enum {
            enum_name: E::NAME,
            variant: self.label(),
            raw: self.raw(),
        }
    }
}

impl<E: KnownEnum> AsFieldValue for Option<OpenEnum<E>> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_ref().map_or(FieldValue::Null, AsFieldValue::as_field_value)
    }
}

impl<R: Record> AsFieldValue for Option<Box<R>> {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(record) => FieldValue::Record(&**record),
            None => FieldValue::Null,
        }
    }
}

impl<R: Record> AsFieldValue for Vec<Option<R>> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Records(
            self.iter()
                .map(|item| item.as_ref().map(|r| r as &dyn Record))
                .collect(),
        )
    }
}

impl<R: Record> AsFieldValue for Option<Vec<Option<R>>> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_ref().map_or(FieldValue::Null, AsFieldValue::as_field_value)
    }
}

impl AsFieldValue for Option<Vec<i32>> {
    fn as_field_value(&self) -> FieldValue<'_> {
        self.as_deref().map_or(FieldValue::Null, FieldValue::Ints)
    }
}
