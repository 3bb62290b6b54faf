/// Errors raised while pulling raw fields off a SPLICE byte buffer.
///
/// These are purely structural: the wire layer knows how many bytes a
/// field occupies and which byte order it uses, but nothing about what
/// the field means. The decoder crate maps these into its own
/// `DecodeError` and attaches the name of the field being read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// A read asked for more bytes than remain in the buffer.
    #[error("unexpected end of input at offset {offset}: needed {needed} bytes, {available} available")]
    UnexpectedEof {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// The leading 6 bytes are not the ASCII literal "SPLICE".
    #[error("invalid tag: expected \"SPLICE\", got {:?}", String::from_utf8_lossy(found))]
    InvalidTag { found: Vec<u8> },
}

