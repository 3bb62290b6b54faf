//! End-to-end decode properties over builder-made and golden inputs.

use std::path::Path;

use splice_decoder::{DecodeError, LoadError, SpliceDecoder};
use splice_tests::{FixtureBuilder, golden_fixtures, grid};

fn canonical() -> Vec<u8> {
    FixtureBuilder::new("0.808-alpha")
        .tempo(120.0)
        .track(0, "kick", grid("|x---|x---|x---|x---|"))
        .build()
}

// ── Canonical fixture ─────────────────────────────────────────────────────────

#[test]
fn canonical_fixture_decodes() {
    let pattern = SpliceDecoder::decode(&canonical()).expect("canonical fixture should decode");

    assert_eq!(pattern.version(), "0.808-alpha");
    assert!((pattern.tempo() - 120.0).abs() < f32::EPSILON);
    assert_eq!(pattern.tracks().len(), 1);
    assert_eq!(pattern.tracks()[0].id(), 0);
    assert_eq!(pattern.tracks()[0].name(), "kick");
    assert_eq!(pattern.tracks()[0].steps()[0], 1);
    assert_eq!(pattern.tracks()[0].steps()[1], 0);
}

#[test]
fn canonical_fixture_from_hex() {
    // Same file as `canonical()`, spelled out byte by byte.
    let bytes = hex::decode(concat!(
        "53504c494345",                                                     // "SPLICE"
        "000000000000003d",                                                 // body length 61
        "302e3830382d616c706861000000000000000000000000000000000000000000", // version
        "0000f042",                                                         // 120.0 LE
        "00",                                                               // id
        "00000004",                                                         // name length
        "6b69636b",                                                         // "kick"
        "01000000010000000100000001000000",                                 // steps
    ))
    .unwrap();
    assert_eq!(bytes, canonical());
    assert_eq!(
        SpliceDecoder::decode(&bytes).unwrap(),
        SpliceDecoder::decode(&canonical()).unwrap()
    );
}

// ── Header ────────────────────────────────────────────────────────────────────

#[test]
fn any_other_tag_is_invalid_header() {
    for tag in [b"SPLICF", b"splice", b"\0\0\0\0\0\0", b"RIFF\0\0", b"SPLIC\0"] {
        let bytes = FixtureBuilder::new("v").tag(tag).build();
        assert!(
            matches!(
                SpliceDecoder::decode(&bytes),
                Err(DecodeError::InvalidHeader { .. })
            ),
            "tag {tag:?} should be rejected"
        );
    }
}

#[test]
fn invalid_header_carries_found_bytes() {
    let bytes = FixtureBuilder::new("v").tag(b"MThd\0\0").build();
    assert_eq!(
        SpliceDecoder::decode(&bytes).unwrap_err(),
        DecodeError::InvalidHeader {
            found: b"MThd\0\0".to_vec()
        }
    );
}

// ── Truncation ────────────────────────────────────────────────────────────────

#[test]
fn every_truncation_is_truncated_input() {
    for (name, bytes) in golden_fixtures() {
        let pattern = SpliceDecoder::decode(&bytes).unwrap();
        let (_, layout) = SpliceDecoder::decode_with_layout(&bytes).unwrap();

        // Too short to hold the tag: never a SPLICE file.
        for cut in 0..6 {
            let result = SpliceDecoder::decode(&bytes[..cut]);
            assert!(
                matches!(result, Err(DecodeError::InvalidHeader { .. })),
                "{name} cut at {cut}: expected InvalidHeader, got {result:?}"
            );
        }

        // Cutting anywhere else inside header or body must fail; never a short pattern.
        for cut in 6..layout.body_end {
            let result = SpliceDecoder::decode(&bytes[..cut]);
            assert!(
                matches!(result, Err(DecodeError::TruncatedInput { .. })),
                "{name} cut at {cut}: expected TruncatedInput, got {result:?}"
            );
        }

        // Cutting into trailing data changes nothing.
        for cut in layout.body_end..=bytes.len() {
            assert_eq!(SpliceDecoder::decode(&bytes[..cut]).unwrap(), pattern);
        }
    }
}

#[test]
fn input_shorter_than_tag_is_invalid_header() {
    for input in [&b""[..], b"S", b"SPL", b"SPLIC"] {
        assert_eq!(
            SpliceDecoder::decode(input).unwrap_err(),
            DecodeError::InvalidHeader {
                found: input.to_vec()
            }
        );
    }
}

#[test]
fn tag_without_length_is_truncated() {
    assert!(matches!(
        SpliceDecoder::decode(b"SPLICE\0\0"),
        Err(DecodeError::TruncatedInput { field: "header", offset: 6, needed: 8, available: 2 })
    ));
}

// ── Text fields ───────────────────────────────────────────────────────────────

#[test]
fn nul_padding_is_stripped() {
    let bytes = FixtureBuilder::with_raw_version(b"0.808-alpha\0\0\0")
        .tempo(120.0)
        .raw_track(0, b"kick\0\0\0\0", [0; 16])
        .build();
    let pattern = SpliceDecoder::decode(&bytes).unwrap();
    assert_eq!(pattern.version(), "0.808-alpha");
    assert_eq!(pattern.tracks()[0].name(), "kick");
}

#[test]
fn exact_length_name_is_unchanged() {
    let bytes = FixtureBuilder::new("v")
        .track(1, "hh-close", [0; 16])
        .build();
    assert_eq!(SpliceDecoder::decode(&bytes).unwrap().tracks()[0].name(), "hh-close");
}

#[test]
fn full_width_version_is_kept() {
    let version = "0123456789abcdef0123456789abcdef";
    let bytes = FixtureBuilder::new(version).build();
    assert_eq!(SpliceDecoder::decode(&bytes).unwrap().version(), version);
}

// ── Byte order ────────────────────────────────────────────────────────────────

#[test]
fn tempo_is_little_endian() {
    // 0x42F00000 is 120.0; read big-endian these bytes are a denormal.
    let raw = [0x00, 0x00, 0xF0, 0x42];
    assert_ne!(f32::from_be_bytes(raw), f32::from_le_bytes(raw));

    let bytes = FixtureBuilder::new("v").tempo_bytes(raw).build();
    let pattern = SpliceDecoder::decode(&bytes).unwrap();
    assert!((pattern.tempo() - 120.0).abs() < f32::EPSILON);
}

#[test]
fn fractional_tempo_round_trips_bits() {
    let bytes = FixtureBuilder::new("v").tempo(98.4).build();
    let pattern = SpliceDecoder::decode(&bytes).unwrap();
    assert_eq!(pattern.tempo().to_bits(), 98.4f32.to_bits());
}

#[test]
fn integers_are_big_endian() {
    // A 300-byte name: length 0x0000012C. Read little-endian that is
    // 0x2C010000 and would run off the end of the input.
    let name = "n".repeat(300);
    let bytes = FixtureBuilder::new("v").track(2, &name, [0; 16]).build();
    let pattern = SpliceDecoder::decode(&bytes).unwrap();
    assert_eq!(pattern.tracks()[0].name().len(), 300);
}

// ── Idempotence ───────────────────────────────────────────────────────────────

#[test]
fn decoding_twice_is_equal_and_leaves_input_alone() {
    for (_, bytes) in golden_fixtures() {
        let before = bytes.clone();
        let first = SpliceDecoder::decode(&bytes).unwrap();
        let second = SpliceDecoder::decode(&bytes).unwrap();
        assert_eq!(first, second);
        assert_eq!(bytes, before);
    }
}

#[test]
fn pattern_outlives_input_buffer() {
    let pattern = {
        let bytes = canonical();
        SpliceDecoder::decode(&bytes).unwrap()
    };
    assert_eq!(pattern.tracks()[0].name(), "kick");
}

// ── Golden patterns ───────────────────────────────────────────────────────────

#[test]
fn golden_track_counts() {
    let expected = [
        ("pattern_1", 6),
        ("pattern_2", 4),
        ("pattern_3", 6),
        ("pattern_4", 4),
        ("pattern_5", 2),
    ];
    for (name, bytes) in golden_fixtures() {
        let count = expected.iter().find(|(n, _)| *n == name).unwrap().1;
        assert_eq!(SpliceDecoder::decode(&bytes).unwrap().tracks().len(), count, "{name}");
    }
}

#[test]
fn decode_file_reads_golden() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden/pattern_4.splice");
    let pattern = SpliceDecoder::decode_file(&path).unwrap();
    assert_eq!(pattern.version(), "0.909");
    let ids: Vec<u8> = pattern.tracks().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec![0, 1, 99, 255]);
}

#[test]
fn decode_file_separates_decode_errors() {
    let path =
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden/edge_cases/bad_tag.splice");
    assert!(matches!(
        SpliceDecoder::decode_file(&path),
        Err(LoadError::Decode(DecodeError::InvalidHeader { .. }))
    ));
}
