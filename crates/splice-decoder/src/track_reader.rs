use splice_wire::ByteCursor;
use splice_wire::header::STEPS_PER_TRACK;
use splice_wire::primitives::{read_fixed_text, read_u8, read_u32_be};

use crate::error::{DecodeError, WireResultExt};
use crate::pattern::Track;

/// Decode one track record at the cursor.
///
/// ```text
/// ┌──────────┬──────────┬───────────────────────────────┐
/// │ Field    │ Size     │ Encoding                      │
/// ├──────────┼──────────┼───────────────────────────────┤
/// │ id       │ 1        │ u8                            │
/// │ name_len │ 4        │ u32 big-endian                │
/// │ name     │ name_len │ text, trailing NULs trimmed   │
/// │ steps    │ 16       │ raw bytes, not validated      │
/// └──────────┴──────────┴───────────────────────────────┘
/// ```
///
/// The record is not checked against the frame's declared body end.
/// A `name_len` that reaches past it either runs out of input, or
/// succeeds and leaves the cursor beyond the body end; the frame loop
/// handles the latter.
///
/// # Errors
///
/// [`DecodeError::TruncatedInput`] if any field runs past the end of the
/// buffer.
pub fn read_track(cur: &mut ByteCursor<'_>) -> Result<Track, DecodeError> {
    let id = read_u8(cur).field("track id")?;
    let name_len = read_u32_be(cur).field("track name length")?;

    // A length that does not fit in usize can never be satisfied.
    let name_len = usize::try_from(name_len).unwrap_or(usize::MAX);
    let name = read_fixed_text(cur, name_len).field("track name")?;

    let steps: [u8; STEPS_PER_TRACK] = cur.read_array().field("track steps")?;

    tracing::trace!(id, name = %name, offset = cur.offset(), "read track record");
    Ok(Track::new(id, name, steps))
}
