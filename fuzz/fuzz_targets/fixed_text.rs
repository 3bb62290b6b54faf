#![no_main]

use libfuzzer_sys::fuzz_target;
use splice_wire::primitives::read_fixed_text;
use splice_wire::ByteCursor;

// Fuzz target: NUL-trimmed text fields.
//
// First byte picks the field width; the rest is the field. Invalid
// UTF-8 must be replaced, never rejected, and the result never ends in
// a NUL.
fuzz_target!(|data: &[u8]| {
    let Some((&width, rest)) = data.split_first() else {
        return;
    };
    let mut cur = ByteCursor::new(rest);
    if let Ok(text) = read_fixed_text(&mut cur, usize::from(width)) {
        assert!(!text.ends_with('\0'));
        assert_eq!(cur.offset(), usize::from(width));
    }
});
