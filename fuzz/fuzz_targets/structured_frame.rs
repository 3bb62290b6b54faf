#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use splice_decoder::SpliceDecoder;

#[derive(Debug, Arbitrary)]
struct Frame {
    version: [u8; 32],
    tempo: f32,
    tracks: Vec<Record>,
}

#[derive(Debug, Arbitrary)]
struct Record {
    id: u8,
    name: String,
    steps: [u8; 16],
}

// Fuzz target: well-formed frame -> decode.
//
// Builds a frame whose body length matches its records exactly and
// asserts every track comes back in order with its steps untouched.
fuzz_target!(|frame: Frame| {
    let mut body = frame.version.to_vec();
    body.extend_from_slice(&frame.tempo.to_le_bytes());
    for r in &frame.tracks {
        body.push(r.id);
        body.extend_from_slice(&(r.name.len() as u32).to_be_bytes());
        body.extend_from_slice(r.name.as_bytes());
        body.extend_from_slice(&r.steps);
    }

    let mut bytes = b"SPLICE".to_vec();
    bytes.extend_from_slice(&(body.len() as u64).to_be_bytes());
    bytes.extend_from_slice(&body);

    let (pattern, layout) = SpliceDecoder::decode_with_layout(&bytes).unwrap();
    assert_eq!(layout.overshoot, None);
    assert_eq!(layout.trailing, 0);
    assert_eq!(pattern.tempo().to_bits(), frame.tempo.to_bits());
    assert_eq!(pattern.tracks().len(), frame.tracks.len());
    for (got, want) in pattern.tracks().iter().zip(&frame.tracks) {
        assert_eq!(got.id(), want.id);
        assert_eq!(got.name(), want.name.trim_end_matches('\0'));
        assert_eq!(got.steps(), &want.steps);
    }
});
