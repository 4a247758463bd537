use crate::error::WireError;
use crate::preamble::Preamble;

/// Sequential, forward-only reader over an in-memory data file.
///
/// `Cursor` hands out exact-length byte slices and tracks how far into
/// the buffer it has advanced. There is no seeking: every field's span is
/// determined by everything decoded before it, so the only way through a
/// stream is front to back.
///
/// The cursor also carries a nesting counter for recursive record
/// decoders. It does not enforce a limit itself; callers compare
/// [`depth`](Self::depth) against their own bound.
///
/// # Usage pattern
///
/// ```text
///   let mut cursor = Cursor::with_preamble(&bytes);
///   let count = read_i32(&mut cursor)?;
///   for _ in 0..count { /* decode one record */ }
/// ```
#[derive(Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
    depth: usize,
    preamble: Option<Preamble>,
}

impl<'a> Cursor<'a> {
    /// Create a cursor that starts decoding at byte 0.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            buf,
            pos: 0,
            depth: 0,
            preamble: None,
        }
    }

    /// Create a cursor positioned after the framing block, if one is
    /// detected at the front of `buf`.
    ///
    /// See [`Preamble::detect`] for the heuristic and its false-positive
    /// risk.
    #[must_use]
    pub fn with_preamble(buf: &'a [u8]) -> Self {
        let preamble = Preamble::detect(buf);
        let pos = match &preamble {
            Some(p) => {
                tracing::debug!(name = %p.name, size = p.size, "skipping framing block");
                p.size
            }
            None => 0,
        };
        Self {
            buf,
            pos,
            depth: 0,
            preamble,
        }
    }

    /// Read exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::TruncatedStream`] if fewer than `n` bytes
    /// remain. The cursor does not advance on failure.
    pub fn read(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let available = self.buf.len() - self.pos;
        if n > available {
            return Err(WireError::TruncatedStream {
                offset: self.pos,
                needed: n,
                available,
            });
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Read exactly `N` bytes into a fixed array.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::TruncatedStream`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let bytes = self.read(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Bytes consumed so far, framing block included. Diagnostic only.
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The unread tail of the buffer.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Whether every byte has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// The framing block skipped by [`with_preamble`](Self::with_preamble).
    #[must_use]
    pub fn preamble(&self) -> Option<&Preamble> {
        self.preamble.as_ref()
    }

    /// Current record nesting depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter one level of record nesting and return the new depth.
    pub fn descend(&mut self) -> usize {
        self.depth += 1;
        self.depth
    }

    /// Leave one level of record nesting.
    pub fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
