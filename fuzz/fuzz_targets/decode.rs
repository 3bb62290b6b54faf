#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full SPLICE decoder entry point.
//
// Catches bugs in:
// - Tag validation and short-input handling
// - Body length overflow
// - Track loop termination against the declared body end
// - Name length prefixes larger than the input
fuzz_target!(|data: &[u8]| {
    if let Ok((pattern, layout)) = splice_decoder::SpliceDecoder::decode_with_layout(data) {
        assert_eq!(pattern.tracks().len(), layout.track_offsets.len());
        assert!(layout.consumed <= data.len());
        assert!(layout.track_offsets.iter().all(|&off| off < layout.body_end));
    }
});
