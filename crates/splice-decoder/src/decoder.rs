use std::path::Path;

use splice_wire::ByteCursor;
use splice_wire::header::{SpliceHeader, VERSION_SIZE};
use splice_wire::primitives::{read_fixed_text, read_tempo};

use crate::error::{DecodeError, LoadError, WireResultExt};
use crate::pattern::Pattern;
use crate::track_reader::read_track;

/// Structural facts observed while walking a frame.
///
/// Returned alongside the [`Pattern`] by
/// [`SpliceDecoder::decode_with_layout`]. All offsets are measured from
/// the start of the input buffer.
///
/// ```text
///   0        14                               body_end      len
///   │ header │ version · tempo · tracks ...   │ trailing ... │
///            └──────────── body_len ──────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameLayout {
    /// Body length as declared in the header.
    pub body_len: u64,

    /// Offset just past the header, where the body starts.
    pub body_start: usize,

    /// `body_start + body_len`. The track loop stops once the cursor
    /// reaches or passes this offset.
    pub body_end: usize,

    /// Start offset of each track record, in file order.
    pub track_offsets: Vec<usize>,

    /// Cursor position after the last read.
    pub consumed: usize,

    /// Bytes in the buffer after everything the decoder read or was
    /// told to expect. Never read.
    pub trailing: usize,

    /// How far the cursor ended past `body_end`, if it did.
    ///
    /// Well-formed input finishes its last record exactly at
    /// `body_end`. A body length shorter than the fixed version and
    /// tempo fields, or a last record whose name length runs past the
    /// body, leaves the cursor beyond it. The decode still succeeds.
    pub overshoot: Option<usize>,
}

impl FrameLayout {
    /// The part of [`overshoot`](Self::overshoot) caused by a track
    /// record running past `body_end`.
    ///
    /// `None` when no record was read: a body length of 0, or any value
    /// below the version and tempo width, overshoots without a record
    /// being involved.
    pub fn record_overshoot(&self) -> Option<usize> {
        self.overshoot.filter(|_| !self.track_offsets.is_empty())
    }
}

/// Synchronous SPLICE decoder. Parses a complete in-memory pattern file.
///
/// Decoding walks the frame front to back in a fixed order. No state is
/// skipped or revisited, and the first failing read ends the decode:
///
///   1. **Tag**: 6 bytes, must be "SPLICE".
///   2. **Length**: u64 big-endian body length `L`; the body ends at
///      `offset + L`.
///   3. **Version**: 32-byte NUL-padded string.
///   4. **Tempo**: f32 little-endian.
///   5. **Tracks**: one record at a time while the cursor is short of
///      the body end.
///
/// Bytes after the body end are ignored.
///
/// # Example
///
/// ```rust
/// use splice_decoder::{DecodeError, SpliceDecoder};
///
/// let err = SpliceDecoder::decode(b"RIFF....").unwrap_err();
/// assert!(matches!(err, DecodeError::InvalidHeader { .. }));
/// ```
pub struct SpliceDecoder;

impl SpliceDecoder {
    /// Decode a complete SPLICE pattern from a byte slice.
    ///
    /// Decoding the same bytes twice yields equal patterns; the input is
    /// never modified.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InvalidHeader`] if the tag is not "SPLICE".
    /// - [`DecodeError::TruncatedInput`] if the buffer ends inside any
    ///   field, including a track the body length says is there.
    /// - [`DecodeError::MalformedField`] if the body end offset cannot be
    ///   represented.
    pub fn decode(bytes: &[u8]) -> Result<Pattern, DecodeError> {
        Self::decode_with_layout(bytes).map(|(pattern, _)| pattern)
    }

    /// Decode a pattern and report the frame layout that was walked.
    ///
    /// # Errors
    ///
    /// Same as [`decode`](Self::decode).
    pub fn decode_with_layout(bytes: &[u8]) -> Result<(Pattern, FrameLayout), DecodeError> {
        let mut cur = ByteCursor::new(bytes);

        // 1 & 2. Tag and declared body length.
        let header = SpliceHeader::read_from(&mut cur).field("header")?;
        let body_start = cur.offset();
        let body_end = body_end(body_start, header.body_len)?;
        tracing::debug!(body_len = header.body_len, body_end, "read header");

        // 3. Version.
        let version = read_fixed_text(&mut cur, VERSION_SIZE).field("version")?;

        // 4. Tempo.
        let tempo = read_tempo(&mut cur).field("tempo")?;
        tracing::debug!(version = %version, tempo, "read pattern metadata");

        // 5. Tracks, until the cursor reaches the declared body end.
        let mut tracks = Vec::new();
        let mut track_offsets = Vec::new();
        while cur.offset() < body_end {
            track_offsets.push(cur.offset());
            tracks.push(read_track(&mut cur)?);
        }

        let consumed = cur.offset();
        let layout = FrameLayout {
            body_len: header.body_len,
            body_start,
            body_end,
            track_offsets,
            consumed,
            trailing: bytes.len().saturating_sub(consumed.max(body_end)),
            overshoot: consumed.checked_sub(body_end).filter(|&n| n > 0),
        };

        if let Some(over) = layout.record_overshoot() {
            tracing::warn!(
                body_end,
                consumed,
                over,
                "track record ended past the declared body length"
            );
        } else if let Some(over) = layout.overshoot {
            tracing::debug!(
                body_end,
                over,
                "body length covers no tracks; version and tempo read past it"
            );
        }

        if layout.trailing > 0 {
            tracing::warn!(
                trailing = layout.trailing,
                "ignoring bytes after the declared body"
            );
        }

        tracing::debug!(tracks = tracks.len(), consumed, "decoded pattern");

        Ok((Pattern::new(version, tempo, tracks), layout))
    }

    /// Read a whole file into memory and decode it.
    ///
    /// # Errors
    ///
    /// - [`LoadError::Io`] if the file cannot be read.
    /// - [`LoadError::Decode`] for any [`DecodeError`].
    pub fn decode_file(path: impl AsRef<Path>) -> Result<Pattern, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), len = bytes.len(), "read pattern file");
        Ok(Self::decode(&bytes)?)
    }
}

/// Compute the body end offset, rejecting lengths that are not
/// addressable from `body_start`.
fn body_end(body_start: usize, body_len: u64) -> Result<usize, DecodeError> {
    usize::try_from(body_len)
        .ok()
        .and_then(|len| body_start.checked_add(len))
        .ok_or_else(|| DecodeError::MalformedField {
            field: "body length",
            offset: body_start - splice_wire::header::LENGTH_SIZE,
            reason: format!("body length {body_len} overflows the addressable range"),
        })
}
