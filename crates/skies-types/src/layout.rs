use std::fmt;

/// How one field is laid out on the wire.
///
/// ```text
/// ┌─────────────────────────────────────┬────────────────────────────────────────┐
/// │ Operation                           │ Bytes                                  │
/// ├─────────────────────────────────────┼────────────────────────────────────────┤
/// │ byte / bool                         │ 1                                      │
/// │ int32 / float32                     │ 4                                      │
/// │ varint                              │ 1-10                                   │
/// │ string / optional_string            │ flag [varint len, UTF-8]               │
/// │ optional_int32 / optional_int64     │ flag [4 | 8]                           │
/// │ datetime                            │ 0                                      │
/// │ optional_datetime                   │ flag                                   │
/// │ enum(E)                             │ 4                                      │
/// │ optional_enum(E)                    │ flag [4]                               │
/// │ object(R)                           │ flag [R]                               │
/// │ optional_object(R)                  │ flag flag [R]   both flags always read │
/// │ array_of_optional_object(R)         │ int32 N, N x (flag [R])                │
/// │ optional_array_of_optional_object(R)│ flag [int32 N, N x (flag [R])]         │
/// │ array_of_int32                      │ flag [int32 N, N x int32]              │
/// │ invalid                             │ never decodes                          │
/// └─────────────────────────────────────┴────────────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Byte,
    Bool,
    Int32,
    Float32,
    Varint,
    String,
    OptionalString,
    OptionalInt32,
    OptionalInt64,
    DateTime,
    OptionalDateTime,
    Enum,
    OptionalEnum,
    Object,
    OptionalObject,
    ArrayOfOptionalObject,
    OptionalArrayOfOptionalObject,
    ArrayOfInt32,
    Invalid,
}

impl Operation {
    /// The operation's name as written in layout declarations.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Byte => "byte",
            Self::Bool => "bool",
            Self::Int32 => "int32",
            Self::Float32 => "float32",
            Self::Varint => "varint",
            Self::String => "string",
            Self::OptionalString => "optional_string",
            Self::OptionalInt32 => "optional_int32",
            Self::OptionalInt64 => "optional_int64",
            Self::DateTime => "datetime",
            Self::OptionalDateTime => "optional_datetime",
            Self::Enum => "enum",
            Self::OptionalEnum => "optional_enum",
            Self::Object => "object",
            Self::OptionalObject => "optional_object",
            Self::ArrayOfOptionalObject => "array_of_optional_object",
            Self::OptionalArrayOfOptionalObject => "optional_array_of_optional_object",
            Self::ArrayOfInt32 => "array_of_int32",
            Self::Invalid => "invalid",
        }
    }

    /// Whether the field names a nested type (a record or an enumeration).
    #[must_use]
    pub fn takes_nested(self) -> bool {
        matches!(
            self,
            Self::Enum
                | Self::OptionalEnum
                | Self::Object
                | Self::OptionalObject
                | Self::ArrayOfOptionalObject
                | Self::OptionalArrayOfOptionalObject
        )
    }

    /// Whether the nested type is a record (as opposed to an enumeration).
    #[must_use]
    pub fn nests_record(self) -> bool {
        self.takes_nested() && !matches!(self, Self::Enum | Self::OptionalEnum)
    }
}

/// One entry of a record layout: declared name, wire operation and the
/// nested type the operation refers to, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub operation: Operation,
    pub nested: Option<&'static str>,
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.operation.name())?;
        if let Some(nested) = self.nested {
            write!(f, "({nested})")?;
        }
        Ok(())
    }
}

/// The ordered field list of one record type.
///
/// Order is the wire order. Schemas are `'static` constants generated
/// alongside each record struct and never change at run time.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordSchema {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl RecordSchema {
    /// Look up a field by declared name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Wire position of a field.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Names of the record types this layout refers to, in field order,
    /// without repeats.
    #[must_use]
    pub fn nested_records(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for field in self.fields {
            if let Some(nested) = field.nested
                && field.operation.nests_record()
                && !out.contains(&nested)
            {
                out.push(nested);
            }
        }
        out
    }
}

impl fmt::Display for RecordSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for field in self.fields {
            write!(f, "\n  {field}")?;
        }
        Ok(())
    }
}
