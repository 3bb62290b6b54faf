#![no_main]

use libfuzzer_sys::fuzz_target;
use splice_decoder::track_reader::read_track;
use splice_wire::ByteCursor;

// Fuzz target: back-to-back track records with no frame around them.
//
// Catches bugs in:
// - Name length prefixes near u32::MAX
// - Records cut off inside the name or steps
fuzz_target!(|data: &[u8]| {
    let mut cur = ByteCursor::new(data);
    while !cur.is_exhausted() {
        let before = cur.offset();
        match read_track(&mut cur) {
            Ok(track) => assert_eq!(cur.offset() - before, 1 + 4 + track_len(&data[before..]) + 16),
            Err(_) => break,
        }
    }
});

fn track_len(record: &[u8]) -> usize {
    u32::from_be_bytes([record[1], record[2], record[3], record[4]]) as usize
}
