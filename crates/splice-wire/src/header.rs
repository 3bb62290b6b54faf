use crate::cursor::ByteCursor;
use crate::error::WireError;
use crate::primitives::{read_header_tag, read_length};

/// Tag: ASCII "SPLICE". Compared as raw bytes.
pub const SPLICE_TAG: [u8; TAG_SIZE] = *b"SPLICE";

pub const TAG_SIZE: usize = 6;

/// Width of the big-endian body length that follows the tag.
pub const LENGTH_SIZE: usize = 8;

/// Tag plus body length. The body length counts bytes after this point.
pub const HEADER_SIZE: usize = TAG_SIZE + LENGTH_SIZE;

/// Fixed width of the NUL-padded version string.
pub const VERSION_SIZE: usize = 32;

pub const TEMPO_SIZE: usize = 4;

/// Number of step bytes in every track record.
pub const STEPS_PER_TRACK: usize = 16;

/// SPLICE file header: the first 14 bytes of every pattern file.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────┐
/// │ Offset │ Size    │ Description                      │
/// ├────────┼─────────┼──────────────────────────────────┤
/// │ 0x00   │ 6 bytes │ Tag: "SPLICE"                    │
/// │ 0x06   │ 8 bytes │ Body length, u64 big-endian      │
/// └────────┴─────────┴──────────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpliceHeader {
    /// Declared byte count of everything after the header: version,
    /// tempo and all track records.
    pub body_len: u64,
}

impl SpliceHeader {
    /// Read and validate the header at the cursor.
    ///
    /// A buffer shorter than the tag can never hold "SPLICE" and is
    /// reported as [`WireError::InvalidTag`], even when its bytes are a
    /// prefix of the tag or there are none at all.
    ///
    /// # Errors
    ///
    /// - [`WireError::InvalidTag`] if the tag is not "SPLICE" or the
    ///   buffer is shorter than the tag.
    /// - [`WireError::UnexpectedEof`] if the buffer ends inside the body
    ///   length.
    pub fn read_from(cur: &mut ByteCursor<'_>) -> Result<Self, WireError> {
        let rest = cur.peek_rest();
        if rest.len() < TAG_SIZE {
            return Err(WireError::InvalidTag {
                found: rest.to_vec(),
            });
        }

        let tag = read_header_tag(cur)?;
        if tag != SPLICE_TAG {
            return Err(WireError::InvalidTag {
                found: tag.to_vec(),
            });
        }

        let body_len = read_length(cur)?;
        Ok(Self { body_len })
    }
}
