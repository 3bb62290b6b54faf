use splice_wire::header::STEPS_PER_TRACK;

/// A decoded drum pattern.
///
/// Only produced by a successful decode. Fields are private and exposed
/// through accessors, so a `Pattern` cannot be edited after the fact or
/// assembled by hand. It owns all of its text and step data; nothing
/// borrows from the input buffer.
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ Pattern                                      │
/// │   version: String     ← NUL-trimmed, ≤ 32 B  │
/// │   tempo:   f32        ← little-endian        │
/// │   tracks:  Vec<Track> ← on-disk order        │
/// └──────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Pattern {
    version: String,
    tempo: f32,
    tracks: Vec<Track>,
}

impl Pattern {
    pub(crate) fn new(version: String, tempo: f32, tracks: Vec<Track>) -> Self {
        Self {
            version,
            tempo,
            tracks,
        }
    }

    /// Hardware version string the pattern was saved with.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Tempo in beats per minute.
    pub fn tempo(&self) -> f32 {
        self.tempo
    }

    /// Tracks in the order they appear in the file.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}

/// One percussion track: an id, a name and 16 step bytes.
///
/// Neither the id nor the step values are validated. Ids may repeat and
/// steps may hold any byte; both are kept exactly as read.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Track {
    id: u8,
    name: String,
    steps: [u8; STEPS_PER_TRACK],
}

impl Track {
    pub(crate) fn new(id: u8, name: String, steps: [u8; STEPS_PER_TRACK]) -> Self {
        Self { id, name, steps }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw step bytes, verbatim from the file.
    pub fn steps(&self) -> &[u8; STEPS_PER_TRACK] {
        &self.steps
    }

    /// Whether step `index` is a hit.
    ///
    /// Only the byte value `1` counts as a hit. Out-of-range indices
    /// return `false`.
    pub fn is_active(&self, index: usize) -> bool {
        self.steps.get(index) == Some(&1)
    }

    /// Indices of every step that is a hit, ascending.
    pub fn active_steps(&self) -> impl Iterator<Item = usize> + '_ {
        (0..STEPS_PER_TRACK).filter(|&i| self.is_active(i))
    }
}
