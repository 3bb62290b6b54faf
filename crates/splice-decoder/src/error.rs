use std::path::PathBuf;

use splice_wire::WireError;

/// Errors that can occur while decoding a SPLICE pattern.
///
/// Decoding is all-or-nothing: any of these aborts the decode and no
/// partial [`Pattern`](crate::Pattern) is returned.
///
/// ```text
///   DecodeError
///   ├── InvalidHeader    ← first 6 bytes are not "SPLICE"
///   ├── TruncatedInput   ← a field declares more bytes than remain
///   └── MalformedField   ← field is readable but its value is unusable
/// ```
///
/// None of these are retryable against the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input is not a SPLICE file.
    #[error("invalid header: expected \"SPLICE\", got {:?}", String::from_utf8_lossy(found))]
    InvalidHeader { found: Vec<u8> },

    /// The input ended inside `field`.
    #[error(
        "truncated input reading {field} at offset {offset}: needed {needed} bytes, {available} available"
    )]
    TruncatedInput {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A field decoded structurally but carries a value the frame
    /// cannot work with, e.g. a body length whose end offset is not
    /// addressable.
    ///
    /// A track record that runs past the declared body end is *not*
    /// reported here: the frame loop stops after that record and the
    /// decode succeeds. See `FrameLayout::overshoot`.
    #[error("malformed {field} at offset {offset}: {reason}")]
    MalformedField {
        field: &'static str,
        offset: usize,
        reason: String,
    },
}

impl DecodeError {
    /// Attach a field name to a wire-level failure.
    pub fn from_wire(field: &'static str, err: WireError) -> Self {
        match err {
            WireError::UnexpectedEof {
                offset,
                needed,
                available,
            } => Self::TruncatedInput {
                field,
                offset,
                needed,
                available,
            },
            WireError::InvalidTag { found } => Self::InvalidHeader { found },
        }
    }
}

/// Extension for naming the field a wire read belongs to.
pub(crate) trait WireResultExt<T> {
    fn field(self, name: &'static str) -> Result<T, DecodeError>;
}

impl<T> WireResultExt<T> for Result<T, WireError> {
    fn field(self, name: &'static str) -> Result<T, DecodeError> {
        self.map_err(|e| DecodeError::from_wire(name, e))
    }
}

/// Errors from [`SpliceDecoder::decode_file`](crate::SpliceDecoder::decode_file).
///
/// I/O failures are kept apart from format failures so callers can
/// tell "could not read the file" from "the file is not a valid pattern".
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
