//! Fixture writer for `.dat` streams.
//!
//! There is no encoder in the workspace, so tests build their input bytes
//! here. A [`RecordFixture`] walks a record's [`RecordSchema`] in wire
//! order and writes each field either from an explicitly set value or as
//! its zero encoding, so a test only states the fields it cares about.
//!
//! ```text
//!   RecordFixture::new(Quality::SCHEMA)
//!       .set("name", "Fuel")
//!       .set("id", 125_025)
//!       .encode()                      → bytes for one Quality
//!
//!   raw_array(&[Some(q), None])        → count + flagged elements
//!   framed("Qualities", &array)        → framing block + payload
//! ```
//!
//! Mismatches between a value and its field's operation panic: this is
//! test scaffolding, and a wrong fixture should fail loudly.

use std::collections::BTreeMap;

use skies_types::{Operation, RecordSchema};
use skies_wire::varint::{MAX_VARINT_BYTES, encode_varint};

/// A value for one fixture field. Which variants fit which operation is
/// listed on [`RecordFixture::set`].
#[derive(Clone, Debug, PartialEq)]
pub enum FixtureValue {
    Bool(bool),
    Byte(u8),
    Int(i32),
    Long(i64),
    Float(f32),
    Varint(u64),
    Text(String),
    /// Presence flag only, for `optional_datetime`.
    Present,
    /// Pre-encoded bytes of a nested record.
    Record(Vec<u8>),
    /// Pre-encoded array elements; `None` writes an absent flag.
    Records(Vec<Option<Vec<u8>>>),
    Ints(Vec<i32>),
}

impl From<bool> for FixtureValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for FixtureValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for FixtureValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for FixtureValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<Vec<i32>> for FixtureValue {
    fn from(v: Vec<i32>) -> Self {
        Self::Ints(v)
    }
}

/// Growable byte buffer with little-endian primitive writers.
#[derive(Clone, Debug, Default)]
pub struct FixtureWriter {
    buf: Vec<u8>,
}

impl FixtureWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn byte(&mut self, v: u8) -> &mut Self {
        self.buf.push(v);
        self
    }

    pub fn flag(&mut self, present: bool) -> &mut Self {
        self.byte(u8::from(present))
    }

    pub fn i32(&mut self, v: i32) -> &mut Self {
        self.bytes(&v.to_le_bytes())
    }

    pub fn i64(&mut self, v: i64) -> &mut Self {
        self.bytes(&v.to_le_bytes())
    }

    pub fn f32(&mut self, v: f32) -> &mut Self {
        self.bytes(&v.to_le_bytes())
    }

    pub fn varint(&mut self, v: u64) -> &mut Self {
        let mut scratch = [0u8; MAX_VARINT_BYTES];
        let n = encode_varint(v, &mut scratch);
        self.bytes(&scratch[..n])
    }

    /// Varint length and UTF-8 bytes, no presence flag.
    pub fn text(&mut self, s: &str) -> &mut Self {
        self.varint(s.len() as u64).bytes(s.as_bytes())
    }

    /// Signed element count.
    ///
    /// # Panics
    ///
    /// If `n` does not fit in an `i32`.
    pub fn count(&mut self, n: usize) -> &mut Self {
        self.i32(i32::try_from(n).expect("count fits in i32"))
    }

    pub fn bytes(&mut self, b: &[u8]) -> &mut Self {
        self.buf.extend_from_slice(b);
        self
    }

    /// Count, then one flag per element followed by its bytes if present.
    pub fn records(&mut self, items: &[Option<Vec<u8>>]) -> &mut Self {
        self.count(items.len());
        for item in items {
            self.flag(item.is_some());
            if let Some(bytes) = item {
                self.bytes(bytes);
            }
        }
        self
    }

    #[must_use]
    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

/// Builder for the bytes of one record, driven by its schema.
#[derive(Clone, Debug)]
pub struct RecordFixture {
    schema: &'static RecordSchema,
    values: BTreeMap<&'static str, FixtureValue>,
}

impl RecordFixture {
    #[must_use]
    pub fn new(schema: &'static RecordSchema) -> Self {
        Self {
            schema,
            values: BTreeMap::new(),
        }
    }

    /// Give `field` a present value.
    ///
    /// ```text
    ///   byte                                 Byte
    ///   bool                                 Bool
    ///   int32, enum, optional_*32/enum       Int
    ///   optional_int64                       Long
    ///   float32                              Float
    ///   varint                               Varint
    ///   string, optional_string              Text
    ///   optional_datetime                    Present
    ///   object, optional_object              Record
    ///   *array_of_optional_object            Records
    ///   array_of_int32                       Ints
    /// ```
    ///
    /// # Panics
    ///
    /// If the schema has no field called `field`.
    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<FixtureValue>) -> Self {
        let descriptor = self
            .schema
            .field(field)
            .unwrap_or_else(|| panic!("{} has no field {field}", self.schema.name));
        self.values.insert(descriptor.name, value.into());
        self
    }

    /// Encode every field in wire order.
    ///
    /// # Panics
    ///
    /// On a value that does not fit its field's operation, or on an
    /// `invalid` field (those have no encoding).
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        let mut w = FixtureWriter::new();
        for field in self.schema.fields {
            match self.values.get(field.name) {
                Some(value) => write_value(&mut w, field.operation, value, field.name),
                None => write_zero(&mut w, field.operation, field.name),
            }
        }
        w.finish()
    }
}

fn write_zero(w: &mut FixtureWriter, op: Operation, field: &str) {
    match op {
        Operation::DateTime => {}
        Operation::Byte | Operation::Bool | Operation::Varint => {
            w.byte(0);
        }
        Operation::Int32 | Operation::Float32 | Operation::Enum => {
            w.i32(0);
        }
        Operation::ArrayOfOptionalObject => {
            w.count(0);
        }
        Operation::OptionalArrayOfOptionalObject | Operation::ArrayOfInt32 => {
            w.flag(true).count(0);
        }
        Operation::OptionalObject => {
            w.flag(false).flag(false);
        }
        Operation::String
        | Operation::OptionalString
        | Operation::OptionalInt32
        | Operation::OptionalInt64
        | Operation::OptionalDateTime
        | Operation::OptionalEnum
        | Operation::Object => {
            w.flag(false);
        }
        Operation::Invalid => panic!("field {field} is invalid and has no encoding"),
    }
}

fn write_value(w: &mut FixtureWriter, op: Operation, value: &FixtureValue, field: &str) {
    match (op, value) {
        (Operation::Byte, FixtureValue::Byte(v)) => {
            w.byte(*v);
        }
        (Operation::Bool, FixtureValue::Bool(v)) => {
            w.flag(*v);
        }
        (Operation::Int32 | Operation::Enum, FixtureValue::Int(v)) => {
            w.i32(*v);
        }
        (Operation::Float32, FixtureValue::Float(v)) => {
            w.f32(*v);
        }
        (Operation::Varint, FixtureValue::Varint(v)) => {
            w.varint(*v);
        }
        (Operation::String | Operation::OptionalString, FixtureValue::Text(s)) => {
            w.flag(true).text(s);
        }
        (Operation::OptionalInt32 | Operation::OptionalEnum, FixtureValue::Int(v)) => {
            w.flag(true).i32(*v);
        }
        (Operation::OptionalInt64, FixtureValue::Long(v)) => {
            w.flag(true).i64(*v);
        }
        (Operation::OptionalDateTime, FixtureValue::Present) => {
            w.flag(true);
        }
        (Operation::Object, FixtureValue::Record(bytes)) => {
            w.flag(true).bytes(bytes);
        }
        (Operation::OptionalObject, FixtureValue::Record(bytes)) => {
            w.flag(true).flag(true).bytes(bytes);
        }
        (Operation::ArrayOfOptionalObject, FixtureValue::Records(items)) => {
            w.records(items);
        }
        (Operation::OptionalArrayOfOptionalObject, FixtureValue::Records(items)) => {
            w.flag(true).records(items);
        }
        (Operation::ArrayOfInt32, FixtureValue::Ints(items)) => {
            w.flag(true).count(items.len());
            for v in items {
                w.i32(*v);
            }
        }
        (op, value) => panic!("field {field}: {value:?} does not fit {}", op.name()),
    }
}

/// Zero encoding of a whole record: what a blank instance looks like on
/// the wire. Array fields are present and empty.
#[must_use]
pub fn zero_record(schema: &'static RecordSchema) -> Vec<u8> {
    RecordFixture::new(schema).encode()
}

/// A top-level dataset body: count, then flagged elements.
#[must_use]
pub fn raw_array(items: &[Option<Vec<u8>>]) -> Vec<u8> {
    let mut w = FixtureWriter::new();
    w.records(items);
    w.finish()
}

/// Wrap `payload` in a framing block named `name`.
///
/// # Panics
///
/// If `name` is 20 bytes or longer, or the payload exceeds `u32::MAX`.
#[must_use]
pub fn framed(name: &str, payload: &[u8]) -> Vec<u8> {
    assert!(name.len() < skies_wire::preamble::MAX_NAME_LEN, "name too long");
    let padding = name.len().wrapping_neg() & 3;
    let mut w = FixtureWriter::new();
    w.count(name.len())
        .bytes(name.as_bytes())
        .bytes(&[0; 3][..padding])
        .i32(i32::try_from(payload.len()).expect("payload fits in i32"))
        .bytes(payload);
    w.finish()
}

#[cfg(test)]
mod tests {
    use skies_types::RecordType;
    use skies_types::records::QEnhancement;

    use super::*;

    #[test]
    fn zero_record_follows_layout() {
        // level int32, associated_quality optional_object, id int32
        assert_eq!(zero_record(QEnhancement::SCHEMA), vec![0; 10]);
    }

    #[test]
    fn zero_arrays_are_present_and_empty() {
        // child_branches, then parent_branch: optional_object.
        let bytes = zero_record(skies_types::records::Event::SCHEMA);
        assert_eq!(&bytes[..7], &[1, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn set_fields_are_encoded_in_place() {
        let bytes = RecordFixture::new(QEnhancement::SCHEMA)
            .set("id", 7)
            .set("level", 2)
            .encode();
        assert_eq!(bytes, [2, 0, 0, 0, 0, 0, 7, 0, 0, 0]);
    }

    #[test]
    fn framing_block_is_padded() {
        let bytes = framed("Area", &[0xAA]);
        assert_eq!(&bytes[..12], &[4, 0, 0, 0, b'A', b'r', b'e', b'a', 1, 0, 0, 0]);

        let bytes = framed("Qualities", &[]);
        assert_eq!(bytes.len(), 4 + 9 + 3 + 4);
        let preamble = skies_wire::Preamble::detect(&bytes).unwrap();
        assert_eq!(preamble.name, "Qualities");
        assert_eq!(preamble.size, bytes.len());
    }

    #[test]
    #[should_panic(expected = "has no field")]
    fn unknown_field_panics() {
        let _ = RecordFixture::new(QEnhancement::SCHEMA).set("nope", 1);
    }
}
