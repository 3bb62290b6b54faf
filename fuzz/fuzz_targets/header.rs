#![no_main]

use libfuzzer_sys::fuzz_target;
use splice_wire::header::{SpliceHeader, HEADER_SIZE};
use splice_wire::ByteCursor;

// Fuzz target: SpliceHeader::read_from with arbitrary bytes.
//
// A successful read always consumes exactly the 14 header bytes; a
// failed one consumes nothing it reports.
fuzz_target!(|data: &[u8]| {
    let mut cur = ByteCursor::new(data);
    if SpliceHeader::read_from(&mut cur).is_ok() {
        assert_eq!(cur.offset(), HEADER_SIZE);
        assert_eq!(&data[..6], b"SPLICE");
    }
});
