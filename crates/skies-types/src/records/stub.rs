record! {
  /// Placeholder for references the data never populates.
  ///
  /// Every field typed `Stub` is expected to be absent. Its single field
  /// uses the `invalid` operation, so decoding one always fails with
  /// [`DecodeError::UnexpectedRecordType`](crate::DecodeError::UnexpectedRecordType)
  /// instead of silently misreading the bytes that follow.
  pub struct Stub {
    id: invalid,
  }
}
