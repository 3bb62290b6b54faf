use crate::cursor::ByteCursor;
use crate::error::WireError;
use crate::header::TAG_SIZE;

// Each field of the format has exactly one byte order, so every reader
// below is named for the field width and hard-codes its order. Integers
// are big-endian; the tempo float is little-endian.
//
// ┌──────────────────┬───────┬───────────────┐
// │ Reader           │ Width │ Byte order    │
// ├──────────────────┼───────┼───────────────┤
// │ read_header_tag  │ 6     │ raw           │
// │ read_length      │ 8     │ big-endian    │
// │ read_tempo       │ 4     │ little-endian │
// │ read_u8          │ 1     │ n/a           │
// │ read_u32_be      │ 4     │ big-endian    │
// │ read_fixed_text  │ n     │ raw, NUL-trim │
// └──────────────────┴───────┴───────────────┘

/// Read the 6 raw tag bytes. No interpretation; the caller validates.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than 6 bytes remain.
pub fn read_header_tag(cur: &mut ByteCursor<'_>) -> Result<[u8; TAG_SIZE], WireError> {
    cur.read_array()
}

/// Read the declared body length: an unsigned 64-bit big-endian integer.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than 8 bytes remain.
pub fn read_length(cur: &mut ByteCursor<'_>) -> Result<u64, WireError> {
    cur.read_array().map(u64::from_be_bytes)
}

/// Read the tempo: an IEEE-754 single-precision float, little-endian.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
pub fn read_tempo(cur: &mut ByteCursor<'_>) -> Result<f32, WireError> {
    cur.read_array().map(f32::from_le_bytes)
}

/// Read a single unsigned byte.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if the buffer is exhausted.
pub fn read_u8(cur: &mut ByteCursor<'_>) -> Result<u8, WireError> {
    cur.read_array().map(|[b]: [u8; 1]| b)
}

/// Read an unsigned 32-bit big-endian integer.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than 4 bytes remain.
pub fn read_u32_be(cur: &mut ByteCursor<'_>) -> Result<u32, WireError> {
    cur.read_array().map(u32::from_be_bytes)
}

/// Read `n` raw bytes and decode them as text after stripping the
/// trailing run of NUL bytes.
///
/// Only the trailing run is removed; a NUL that is followed by any
/// non-NUL byte stays in the string. Bytes that are not valid UTF-8 are
/// replaced with U+FFFD and a warning is logged.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if fewer than `n` bytes remain.
pub fn read_fixed_text(cur: &mut ByteCursor<'_>, n: usize) -> Result<String, WireError> {
    let offset = cur.offset();
    let raw = trim_trailing_nul(cur.read_exact(n)?);

    match std::str::from_utf8(raw) {
        Ok(text) => Ok(text.to_owned()),
        Err(err) => {
            tracing::warn!(offset, %err, "text field is not valid UTF-8, replacing invalid bytes");
            Ok(String::from_utf8_lossy(raw).into_owned())
        }
    }
}

/// Strip every trailing `0x00` byte from `bytes`.
pub fn trim_trailing_nul(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_is_big_endian() {
        let buf = [0, 0, 0, 0, 0, 0, 0x01, 0x02];
        let mut cur = ByteCursor::new(&buf);
        assert_eq!(read_length(&mut cur).unwrap(), 0x0102);
        assert_eq!(cur.offset(), 8);
    }

    #[test]
    fn tempo_is_little_endian() {
        // 120.0f32 == 0x42F00000; on the wire it is stored low byte first.
        let buf = [0x00, 0x00, 0xF0, 0x42];
        let mut cur = ByteCursor::new(&buf);
        let tempo = read_tempo(&mut cur).unwrap();
        assert!((tempo - 120.0).abs() < f32::EPSILON);
        assert_ne!(f32::from_be_bytes(buf), tempo);
    }

    #[test]
    fn u32_is_big_endian() {
        let mut cur = ByteCursor::new(&[0x00, 0x00, 0x00, 0x04]);
        assert_eq!(read_u32_be(&mut cur).unwrap(), 4);
    }

    #[test]
    fn u8_on_empty_buffer_is_eof() {
        let mut cur = ByteCursor::new(&[]);
        assert!(matches!(
            read_u8(&mut cur),
            Err(WireError::UnexpectedEof { needed: 1, available: 0, .. })
        ));
    }

    #[test]
    fn fixed_text_strips_whole_trailing_run() {
        let mut cur = ByteCursor::new(b"0.808-alpha\0\0\0\0\0");
        assert_eq!(read_fixed_text(&mut cur, 16).unwrap(), "0.808-alpha");
        assert_eq!(cur.offset(), 16);
    }

    #[test]
    fn fixed_text_keeps_interior_nul() {
        let mut cur = ByteCursor::new(b"ab\0cd\0\0");
        assert_eq!(read_fixed_text(&mut cur, 7).unwrap(), "ab\0cd");
    }

    #[test]
    fn fixed_text_without_padding_is_unchanged() {
        let mut cur = ByteCursor::new(b"kick");
        assert_eq!(read_fixed_text(&mut cur, 4).unwrap(), "kick");
    }

    #[test]
    fn fixed_text_all_nul_is_empty() {
        let mut cur = ByteCursor::new(&[0u8; 32]);
        assert_eq!(read_fixed_text(&mut cur, 32).unwrap(), "");
    }

    #[test]
    fn fixed_text_invalid_utf8_is_replaced() {
        let mut cur = ByteCursor::new(&[b'h', 0xFF, b'i']);
        assert_eq!(read_fixed_text(&mut cur, 3).unwrap(), "h\u{FFFD}i");
    }

    #[test]
    fn trim_leaves_leading_nul() {
        assert_eq!(trim_trailing_nul(b"\0ab\0"), b"\0ab");
    }
}
