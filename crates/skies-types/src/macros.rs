// ── Macro for record declarations ─────────────────────────────────────
//
// A record is declared once, as an ordered list of `field: operation`
// pairs. From that one list the macro produces:
//
//   - the struct, one public field per entry, typed by the operation
//   - the static RecordSchema (the layout table) in the same order
//   - Default, the blank instance: array fields start as empty lists
//   - RecordType::decode, which reads the fields strictly in that order
//   - Record::field, read-only access by declared name
//
// ┌────────────────────────────────────────┬─────────────────────────────┐
// │ Operation                              │ Rust type                   │
// ├────────────────────────────────────────┼─────────────────────────────┤
// │ byte / bool / int32 / float32 / varint │ u8 / bool / i32 / f32 / u64 │
// │ string                                 │ String                      │
// │ optional_string                        │ Option<String>              │
// │ optional_int32 / optional_int64        │ Option<i32> / Option<i64>   │
// │ datetime / optional_datetime           │ Timestamp / Option<_>       │
// │ enum(E) / optional_enum(E)             │ OpenEnum<E> / Option<_>     │
// │ object(R) / optional_object(R)         │ Option<Box<R>>              │
// │ array_of_optional_object(R)            │ Vec<Option<R>>              │
// │ optional_array_of_optional_object(R)   │ Option<Vec<Option<R>>>      │
// │ array_of_int32                         │ Option<Vec<i32>>            │
// │ invalid                                │ ()                          │
// └────────────────────────────────────────┴─────────────────────────────┘

macro_rules! record {
  // Rust type per operation.
  (@type byte) => { u8 };
  (@type bool) => { bool };
  (@type int32) => { i32 };
  (@type float32) => { f32 };
  (@type varint) => { u64 };
  (@type string) => { String };
  (@type optional_string) => { Option<String> };
  (@type optional_int32) => { Option<i32> };
  (@type optional_int64) => { Option<i64> };
  (@type datetime) => { ::skies_wire::Timestamp };
  (@type optional_datetime) => { Option<::skies_wire::Timestamp> };
  (@type enum ($e:ident)) => { $crate::enums::OpenEnum<$e> };
  (@type optional_enum ($e:ident)) => { Option<$crate::enums::OpenEnum<$e>> };
  (@type object ($r:ident)) => { Option<Box<$r>> };
  (@type optional_object ($r:ident)) => { Option<Box<$r>> };
  (@type array_of_optional_object ($r:ident)) => { Vec<Option<$r>> };
  (@type optional_array_of_optional_object ($r:ident)) => { Option<Vec<Option<$r>>> };
  (@type array_of_int32) => { Option<Vec<i32>> };
  (@type invalid) => { () };

  // Layout-table operation per operation keyword.
  (@op byte) => { $crate::layout::Operation::Byte };
  (@op bool) => { $crate::layout::Operation::Bool };
  (@op int32) => { $crate::layout::Operation::Int32 };
  (@op float32) => { $crate::layout::Operation::Float32 };
  (@op varint) => { $crate::layout::Operation::Varint };
  (@op string) => { $crate::layout::Operation::String };
  (@op optional_string) => { $crate::layout::Operation::OptionalString };
  (@op optional_int32) => { $crate::layout::Operation::OptionalInt32 };
  (@op optional_int64) => { $crate::layout::Operation::OptionalInt64 };
  (@op datetime) => { $crate::layout::Operation::DateTime };
  (@op optional_datetime) => { $crate::layout::Operation::OptionalDateTime };
  (@op enum) => { $crate::layout::Operation::Enum };
  (@op optional_enum) => { $crate::layout::Operation::OptionalEnum };
  (@op object) => { $crate::layout::Operation::Object };
  (@op optional_object) => { $crate::layout::Operation::OptionalObject };
  (@op array_of_optional_object) => { $crate::layout::Operation::ArrayOfOptionalObject };
  (@op optional_array_of_optional_object) => {
    $crate::layout::Operation::OptionalArrayOfOptionalObject
  };
  (@op array_of_int32) => { $crate::layout::Operation::ArrayOfInt32 };
  (@op invalid) => { $crate::layout::Operation::Invalid };

  // Blank value per operation. Arrays are empty rather than absent.
  (@default optional_array_of_optional_object ($r:ident)) => { Some(Vec::new()) };
  (@default array_of_int32) => { Some(Vec::new()) };
  (@default $op:ident $( ($nested:ident) )?) => { ::core::default::Default::default() };

  (@nested) => { None };
  (@nested $n:ident) => { Some(stringify!($n)) };

  // Reader call per operation.
  (@read $c:ident, $rec:ident, byte) => { $crate::decode::read_byte($c) };
  (@read $c:ident, $rec:ident, bool) => { $crate::decode::read_bool($c) };
  (@read $c:ident, $rec:ident, int32) => { $crate::decode::read_i32($c) };
  (@read $c:ident, $rec:ident, float32) => { $crate::decode::read_f32($c) };
  (@read $c:ident, $rec:ident, varint) => { $crate::decode::read_varint($c) };
  (@read $c:ident, $rec:ident, string) => { $crate::decode::read_string($c) };
  (@read $c:ident, $rec:ident, optional_string) => { $crate::decode::read_optional_string($c) };
  (@read $c:ident, $rec:ident, optional_int32) => { $crate::decode::read_optional_i32($c) };
  (@read $c:ident, $rec:ident, optional_int64) => { $crate::decode::read_optional_i64($c) };
  (@read $c:ident, $rec:ident, datetime) => { $crate::decode::read_datetime($c) };
  (@read $c:ident, $rec:ident, optional_datetime) => {
    $crate::decode::read_optional_datetime($c)
  };
  (@read $c:ident, $rec:ident, enum ($e:ident)) => { $crate::decode::read_enum::<$e>($c) };
  (@read $c:ident, $rec:ident, optional_enum ($e:ident)) => {
    $crate::decode::read_optional_enum::<$e>($c)
  };
  (@read $c:ident, $rec:ident, object ($r:ident)) => { $crate::decode::read_object::<$r>($c) };
  (@read $c:ident, $rec:ident, optional_object ($r:ident)) => {
    $crate::decode::read_optional_object::<$r>($c)
  };
  (@read $c:ident, $rec:ident, array_of_optional_object ($r:ident)) => {
    $crate::decode::read_array_of_optional_object::<$r>($c)
  };
  (@read $c:ident, $rec:ident, optional_array_of_optional_object ($r:ident)) => {
    $crate::decode::read_optional_array_of_optional_object::<$r>($c)
  };
  (@read $c:ident, $rec:ident, array_of_int32) => { $crate::decode::read_array_of_int32($c) };
  (@read $c:ident, $rec:ident, invalid) => {
    $crate::decode::read_invalid($c, stringify!($rec))
  };

  (
    $(#[$meta:meta])*
    pub struct $name:ident {
      $( $(#[$fmeta:meta])* $field:ident : $op:ident $( ( $nested:ident ) )? ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Clone, Debug, PartialEq)]
    pub struct $name {
      $( $(#[$fmeta])* pub $field: record!(@type $op $( ($nested) )?), )+
    }

    impl ::core::default::Default for $name {
      fn default() -> Self {
        Self {
          $( $field: record!(@default $op $( ($nested) )?), )+
        }
      }
    }

    impl $crate::record::RecordType for $name {
      const SCHEMA: &'static $crate::layout::RecordSchema = &$crate::layout::RecordSchema {
        name: stringify!($name),
        fields: &[
          $(
            $crate::layout::FieldDescriptor {
              name: stringify!($field),
              operation: record!(@op $op),
              nested: record!(@nested $( $nested )?),
            },
          )+
        ],
      };

      #[allow(clippy::let_unit_value)]
      fn decode(
        cursor: &mut ::skies_wire::Cursor<'_>,
      ) -> Result<Self, $crate::error::DecodeError> {
        $(
          ::tracing::trace!(
            offset = cursor.position(),
            record = stringify!($name),
            field = stringify!($field),
            "decoding field"
          );
          let $field = record!(@read cursor, $name, $op $( ($nested) )?)?;
        )+
        Ok(Self { $( $field ),+ })
      }
    }

    impl $crate::record::Record for $name {
      fn schema(&self) -> &'static $crate::layout::RecordSchema {
        <Self as $crate::record::RecordType>::SCHEMA
      }

      fn field(&self, name: &str) -> Option<$crate::record::FieldValue<'_>> {
        $(
          if name == stringify!($field) {
            return Some($crate::record::AsFieldValue::as_field_value(&self.$field));
          }
        )+
        None
      }
    }
  };
}
