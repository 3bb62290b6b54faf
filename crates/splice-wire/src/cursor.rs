use crate::error::WireError;

/// Forward-only read cursor over an in-memory byte buffer.
///
/// The cursor never seeks backwards. Every successful read advances the
/// offset by exactly the number of bytes returned; a failed read leaves
/// the offset where it was.
///
/// ```text
///   buf:  [ consumed ............ | remaining ............. ]
///                                 ^
///                               offset
/// ```
#[derive(Clone, Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> ByteCursor<'a> {
    /// Wrap `buf` with the offset at 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Current read position, measured from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Total length of the wrapped buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the wrapped buffer has no bytes at all. Pairs with
    /// [`len`](Self::len); use [`is_exhausted`](Self::is_exhausted) to
    /// ask whether any unread bytes remain.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Whether every byte has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// The unconsumed tail, without advancing.
    pub fn peek_rest(&self) -> &'a [u8] {
        &self.buf[self.offset..]
    }

    /// Consume exactly `n` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`WireError::UnexpectedEof`] if fewer than `n` bytes
    /// remain. The offset is not advanced in that case.
    pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let available = self.remaining();
        if n > available {
            return Err(WireError::UnexpectedEof {
                offset: self.offset,
                needed: n,
                available,
            });
        }

        let start = self.offset;
        self.offset += n;
        Ok(&self.buf[start..self.offset])
    }

    /// Consume exactly `N` bytes into a fixed-size array.
    ///
    /// # Errors
    ///
    /// Same as [`read_exact`](Self::read_exact).
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let bytes = self.read_exact(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }
}
