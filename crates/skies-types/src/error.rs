use skies_wire::WireError;

/// Errors raised while interpreting a record layout against a stream.
///
/// These sit one level above [`WireError`]: the wire crate knows how to
/// pull a primitive off the cursor, this crate knows which primitive a
/// field needs and how records nest. Any failure aborts the record being
/// decoded and every record enclosing it; there is no partial result.
///
/// ```text
/// ┌─────────────────────────────────────────────────────────┐
/// │ DecodeError (this crate)                                │
/// │   ├── UnexpectedRecordType  placeholder record on wire  │
/// │   ├── NestingTooDeep        recursion bound exceeded    │
/// │   └── Wire(WireError)       truncation, varint, UTF-8   │
/// └─────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
  /// A placeholder record type appeared in the data.
  ///
  /// Placeholder types (see [`Stub`](crate::records::Stub)) mark
  /// references that the source never populates. Reaching one means the
  /// layout table and the data disagree.
  #[error("unexpected {record} record at offset {offset}")]
  UnexpectedRecordType { record: &'static str, offset: usize },

  /// Records nested deeper than [`MAX_DEPTH`](crate::decode::MAX_DEPTH).
  #[error("records nested {depth} levels deep at offset {offset}")]
  NestingTooDeep { offset: usize, depth: usize },

  #[error(transparent)]
  Wire(#[from] WireError),
}

impl DecodeError {
  /// Whether the failure was the stream running out of bytes.
  #[must_use]
  pub fn is_truncation(&self) -> bool {
    matches!(self, Self::Wire(WireError::TruncatedStream { .. }))
  }
}
