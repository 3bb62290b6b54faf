//! Test support for the SPLICE workspace.
//!
//! [`FixtureBuilder`] assembles pattern files byte by byte so tests can
//! state exactly what is on the wire, including deliberately broken
//! frames. It is a fixture tool for this crate's tests, benches and the
//! golden generator, not a general-purpose encoder.

use splice_wire::header::{SPLICE_TAG, STEPS_PER_TRACK, VERSION_SIZE};

/// Byte-level builder for SPLICE pattern files.
///
/// ```rust
/// use splice_tests::{FixtureBuilder, grid};
///
/// let bytes = FixtureBuilder::new("0.808-alpha")
///     .tempo(120.0)
///     .track(0, "kick", grid("|x---|x---|x---|x---|"))
///     .build();
/// assert_eq!(&bytes[..6], b"SPLICE");
/// ```
#[derive(Clone, Debug)]
pub struct FixtureBuilder {
    tag: Vec<u8>,
    version: Vec<u8>,
    tempo: [u8; 4],
    records: Vec<u8>,
    body_len: Option<u64>,
    trailing: Vec<u8>,
}

impl FixtureBuilder {
    /// Start a pattern with `version`, NUL-padded to 32 bytes on build.
    ///
    /// # Panics
    ///
    /// If `version` is longer than 32 bytes.
    pub fn new(version: &str) -> Self {
        Self::with_raw_version(version.as_bytes())
    }

    /// Start a pattern with raw version bytes, NUL-padded to 32 bytes.
    ///
    /// # Panics
    ///
    /// If `version` is longer than 32 bytes.
    pub fn with_raw_version(version: &[u8]) -> Self {
        assert!(
            version.len() <= VERSION_SIZE,
            "version is {} bytes, field holds {VERSION_SIZE}",
            version.len()
        );
        Self {
            tag: SPLICE_TAG.to_vec(),
            version: version.to_vec(),
            tempo: 0f32.to_le_bytes(),
            records: Vec::new(),
            body_len: None,
            trailing: Vec::new(),
        }
    }

    /// Tempo, written little-endian as the format requires.
    #[must_use]
    pub fn tempo(mut self, tempo: f32) -> Self {
        self.tempo = tempo.to_le_bytes();
        self
    }

    /// Raw tempo bytes, written as given.
    #[must_use]
    pub fn tempo_bytes(mut self, bytes: [u8; 4]) -> Self {
        self.tempo = bytes;
        self
    }

    /// Append a track record with a UTF-8 name.
    #[must_use]
    pub fn track(self, id: u8, name: &str, steps: [u8; STEPS_PER_TRACK]) -> Self {
        self.raw_track(id, name.as_bytes(), steps)
    }

    /// Append a track record whose name bytes are written as given;
    /// `name_len` is their exact length.
    ///
    /// # Panics
    ///
    /// If `name` is longer than `u32::MAX` bytes.
    #[must_use]
    pub fn raw_track(mut self, id: u8, name: &[u8], steps: [u8; STEPS_PER_TRACK]) -> Self {
        let len = u32::try_from(name.len()).expect("name length fits in u32");
        self.records.push(id);
        self.records.extend_from_slice(&len.to_be_bytes());
        self.records.extend_from_slice(name);
        self.records.extend_from_slice(&steps);
        self
    }

    /// Append arbitrary bytes to the track area, counted in the body.
    #[must_use]
    pub fn raw_records(mut self, bytes: &[u8]) -> Self {
        self.records.extend_from_slice(bytes);
        self
    }

    /// Override the declared body length instead of computing it.
    #[must_use]
    pub fn body_len(mut self, len: u64) -> Self {
        self.body_len = Some(len);
        self
    }

    /// Replace the 6-byte tag.
    #[must_use]
    pub fn tag(mut self, tag: &[u8]) -> Self {
        self.tag = tag.to_vec();
        self
    }

    /// Bytes appended after the body, not counted in the body length.
    #[must_use]
    pub fn trailing(mut self, bytes: &[u8]) -> Self {
        self.trailing.extend_from_slice(bytes);
        self
    }

    /// Length of the body as built: version + tempo + records.
    pub fn actual_body_len(&self) -> u64 {
        (VERSION_SIZE + self.tempo.len() + self.records.len()) as u64
    }

    /// Assemble the file bytes.
    pub fn build(&self) -> Vec<u8> {
        let body_len = self.body_len.unwrap_or_else(|| self.actual_body_len());

        let mut out = Vec::with_capacity(14 + VERSION_SIZE + 4 + self.records.len());
        out.extend_from_slice(&self.tag);
        out.extend_from_slice(&body_len.to_be_bytes());
        out.extend_from_slice(&self.version);
        out.resize(out.len() + VERSION_SIZE - self.version.len(), 0);
        out.extend_from_slice(&self.tempo);
        out.extend_from_slice(&self.records);
        out.extend_from_slice(&self.trailing);
        out
    }
}

/// Parse a step grid such as `"|x---|x---|x---|x---|"` into step bytes.
///
/// `|` and spaces are ignored; `x` is a hit (1), anything else a rest (0).
///
/// # Panics
///
/// If the grid does not contain exactly 16 steps.
pub fn grid(s: &str) -> [u8; STEPS_PER_TRACK] {
    let cells: Vec<u8> = s
        .chars()
        .filter(|c| *c != '|' && !c.is_whitespace())
        .map(|c| u8::from(c == 'x'))
        .collect();
    cells
        .try_into()
        .unwrap_or_else(|v: Vec<u8>| panic!("grid {s:?} has {} steps, expected 16", v.len()))
}

/// The golden patterns, by fixture name.
///
/// `generate_golden` writes these to `tests/golden/`; the conformance
/// tests decode the committed files and compare rendered output.
pub fn golden_fixtures() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        (
            "pattern_1",
            FixtureBuilder::new("0.808-alpha")
                .tempo(120.0)
                .track(0, "kick", grid("|x---|x---|x---|x---|"))
                .track(1, "snare", grid("|----|x---|----|x---|"))
                .track(2, "clap", grid("|----|x-x-|----|----|"))
                .track(3, "hh-open", grid("|--x-|--x-|x-x-|--x-|"))
                .track(4, "hh-close", grid("|x---|x---|----|x--x|"))
                .track(5, "cowbell", grid("|----|----|--x-|----|"))
                .build(),
        ),
        (
            "pattern_2",
            FixtureBuilder::new("0.808-alpha")
                .tempo(98.4)
                .track(0, "kick", grid("|x---|----|x---|----|"))
                .track(1, "snare", grid("|----|x---|----|x---|"))
                .track(3, "hh-open", grid("|--x-|--x-|x-x-|--x-|"))
                .track(5, "cowbell", grid("|----|----|x---|----|"))
                .build(),
        ),
        (
            "pattern_3",
            FixtureBuilder::new("0.808-alpha")
                .tempo(118.0)
                .track(40, "kick", grid("|x---|----|----|----|"))
                .track(1, "clap", grid("|----|x---|----|----|"))
                .track(3, "hh-open", grid("|---x|--x-|---x|-x--|"))
                .track(5, "low-tom", grid("|----|---x|----|----|"))
                .track(12, "mid-tom", grid("|----|----|x---|----|"))
                .track(9, "hi-tom", grid("|----|----|-x--|----|"))
                .build(),
        ),
        (
            "pattern_4",
            FixtureBuilder::new("0.909")
                .tempo(240.0)
                .track(0, "SubKick", grid("|----|----|----|----|"))
                .track(1, "Kick", grid("|x---|----|x---|----|"))
                .track(99, "Maracas", grid("|x-x-|x-x-|x-x-|x-x-|"))
                .track(255, "Low Conga", grid("|----|x---|----|----|"))
                .build(),
        ),
        (
            "pattern_5",
            FixtureBuilder::new("0.708-alpha")
                .tempo(999.0)
                .track(1, "Kick", grid("|x---|----|x---|----|"))
                .track(2, "HiHat", grid("|x-x-|x-x-|x-x-|x-x-|"))
                .trailing(b"SPLICE\0\0\0\0\0\0\0\x00trailing junk the body length excludes")
                .build(),
        ),
    ]
}

/// Edge-case files, by fixture name. Written to `tests/golden/edge_cases/`.
pub fn edge_case_fixtures() -> Vec<(&'static str, Vec<u8>)> {
    let truncated = {
        let mut bytes = golden_fixtures()[0].1.clone();
        bytes.truncate(bytes.len() - 10);
        bytes
    };

    vec![
        (
            "zero_body_len",
            FixtureBuilder::new("0.808-alpha")
                .tempo(120.0)
                .track(0, "kick", grid("|x---|x---|x---|x---|"))
                .body_len(0)
                .build(),
        ),
        (
            "nul_padded_names",
            FixtureBuilder::with_raw_version(b"0.808-alpha\0\0\0")
                .tempo(120.0)
                .raw_track(0, b"kick\0\0\0\0", grid("|x---|x---|x---|x---|"))
                .raw_track(1, b"sn\0are\0", grid("|----|x---|----|x---|"))
                .build(),
        ),
        (
            "overshooting_record",
            FixtureBuilder::new("0.808-alpha")
                .tempo(120.0)
                .track(7, "ride", grid("|x-x-|x-x-|x-x-|x-x-|"))
                .body_len(32 + 4 + 1)
                .trailing(b"never read")
                .build(),
        ),
        (
            "bad_tag",
            FixtureBuilder::new("0.808-alpha")
                .tag(b"SPLICF")
                .tempo(120.0)
                .build(),
        ),
        ("truncated", truncated),
    ]
}
