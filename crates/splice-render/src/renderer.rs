use splice_decoder::{Pattern, Track};

use crate::config::{OutputMode, RenderConfig};
use crate::error::RenderError;
use crate::render_json::JsonRenderer;
use crate::render_text::TextRenderer;

/// Renders a decoded [`Pattern`] for people or other tools.
///
/// Implementations are stateless; everything comes through the config.
///
/// ```text
/// Pattern ──▶ PatternRenderer::render() ──▶ String
///                       │
///                 RenderConfig
///             (mode, include_tracks)
/// ```
pub trait PatternRenderer {
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the chosen output format fails.
    fn render(&self, pattern: &Pattern, config: &RenderConfig) -> Result<String, RenderError>;
}

/// Default renderer: applies the track filter, then dispatches on mode.
pub struct DefaultRenderer;

impl PatternRenderer for DefaultRenderer {
    fn render(&self, pattern: &Pattern, config: &RenderConfig) -> Result<String, RenderError> {
        let tracks: Vec<&Track> = pattern
            .tracks()
            .iter()
            .filter(|t| config.includes(t.id()))
            .collect();

        match config.mode {
            OutputMode::Text => Ok(TextRenderer::render_all(pattern, &tracks)),
            OutputMode::Json => JsonRenderer::render_all(pattern, &tracks),
        }
    }
}
