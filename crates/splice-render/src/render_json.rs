use serde::Serialize;
use splice_decoder::{Pattern, Track};

use crate::error::RenderError;

/// Serializable view of a pattern with an already-filtered track list.
#[derive(Serialize)]
struct PatternView<'a> {
    version: &'a str,
    tempo: f32,
    tracks: &'a [&'a Track],
}

/// JSON renderer: pretty-printed, machine-readable output.
///
/// ```text
/// {
///   "version": "0.808-alpha",
///   "tempo": 120.0,
///   "tracks": [
///     { "id": 0, "name": "kick", "steps": [1, 0, 0, 0, ...] }
///   ]
/// }
/// ```
///
/// Step bytes are emitted verbatim, so values other than 0 and 1 survive.
pub struct JsonRenderer;

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns [`RenderError::Json`] if serialization fails.
    pub fn render_all(pattern: &Pattern, tracks: &[&Track]) -> Result<String, RenderError> {
        let view = PatternView {
            version: pattern.version(),
            tempo: pattern.tempo(),
            tracks,
        };
        Ok(serde_json::to_string_pretty(&view)?)
    }
}
