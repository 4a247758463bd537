/// Byte-level failures raised while pulling primitives off a stream.
///
/// Every variant records the absolute offset (from the start of the
/// backing buffer, framing block included) where the failing read began,
/// so a corrupt `.dat` file can be inspected with a hex viewer.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Fewer bytes remained than a primitive decode required.
    #[error("truncated stream: needed {needed} bytes at offset {offset}, {available} available")]
    TruncatedStream {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A varint kept its continuation bit set past the 10-byte limit.
    #[error("malformed varint at offset {offset}: exceeded 10-byte limit")]
    MalformedVarint { offset: usize },

    /// String payload bytes were not valid UTF-8.
    #[error("invalid UTF-8 in string at offset {offset}")]
    TextDecode {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },
}

impl WireError {
    /// Shift the recorded offset by `base`.
    ///
    /// Slice-level decoders (like [`decode_varint`](crate::varint::decode_varint))
    /// report offsets relative to the slice they were handed; the cursor
    /// rebases them onto the whole buffer.
    #[must_use]
    pub fn rebase(self, base: usize) -> Self {
        match self {
            Self::TruncatedStream {
                offset,
                needed,
                available,
            } => Self::TruncatedStream {
                offset: offset + base,
                needed,
                available,
            },
            Self::MalformedVarint { offset } => Self::MalformedVarint {
                offset: offset + base,
            },
            Self::TextDecode { offset, source } => Self::TextDecode {
                offset: offset + base,
                source,
            },
        }
    }

    /// Byte offset where the failing read started.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::TruncatedStream { offset, .. }
            | Self::MalformedVarint { offset }
            | Self::TextDecode { offset, .. } => *offset,
        }
    }
}
