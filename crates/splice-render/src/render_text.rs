use std::fmt::Write as _;

use splice_decoder::{Pattern, Track};
use splice_wire::header::STEPS_PER_TRACK;

/// Steps per `|`-delimited group in the grid.
const STEPS_PER_GROUP: usize = 4;

/// Text renderer: the step-grid layout drum machines print.
///
/// Example output:
///
/// ```text
/// Saved with HW Version: 0.808-alpha
/// Tempo: 120
/// (0) kick	|x---|x---|x---|x---|
/// (1) snare	|----|x---|----|x---|
/// ```
///
/// Every line, including the last, ends in `\n`. A step byte of exactly
/// `1` prints as `x`; any other value prints as `-`.
pub struct TextRenderer;

impl TextRenderer {
    /// Render the header lines followed by one line per track in `tracks`.
    pub fn render_all(pattern: &Pattern, tracks: &[&Track]) -> String {
        let mut out = String::new();
        // Writing to a String is infallible.
        let _ = writeln!(out, "Saved with HW Version: {}", pattern.version());
        let _ = writeln!(out, "Tempo: {}", pattern.tempo());
        for track in tracks {
            out.push_str(&Self::render_track(track));
            out.push('\n');
        }
        out
    }

    /// Render one track as `(id) name<TAB>|....|....|....|....|`.
    pub fn render_track(track: &Track) -> String {
        format!("({}) {}\t{}", track.id(), track.name(), step_grid(track))
    }
}

/// Render the 16 steps of `track` as `|`-grouped `x`/`-` characters.
pub fn step_grid(track: &Track) -> String {
    let mut grid = String::with_capacity(STEPS_PER_TRACK + STEPS_PER_TRACK / STEPS_PER_GROUP + 1);
    for i in 0..STEPS_PER_TRACK {
        if i % STEPS_PER_GROUP == 0 {
            grid.push('|');
        }
        grid.push(if track.is_active(i) { 'x' } else { '-' });
    }
    grid.push('|');
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{pattern, steps};

    #[test]
    fn renders_reference_layout() {
        let p = pattern(
            "0.808-alpha",
            120.0,
            &[
                (0, "kick", steps("x---x---x---x---")),
                (1, "snare", steps("----x-------x---")),
            ],
        );
        let tracks: Vec<&Track> = p.tracks().iter().collect();
        assert_eq!(
            TextRenderer::render_all(&p, &tracks),
            "Saved with HW Version: 0.808-alpha\n\
             Tempo: 120\n\
             (0) kick\t|x---|x---|x---|x---|\n\
             (1) snare\t|----|x---|----|x---|\n"
        );
    }

    #[test]
    fn fractional_tempo_keeps_decimals() {
        let p = pattern("0.708-alpha", 98.4, &[]);
        assert_eq!(
            TextRenderer::render_all(&p, &[]),
            "Saved with HW Version: 0.708-alpha\nTempo: 98.4\n"
        );
    }

    #[test]
    fn large_tempo_prints_positionally() {
        let p = pattern("v", 1e21, &[]);
        assert_eq!(
            TextRenderer::render_all(&p, &[]),
            "Saved with HW Version: v\nTempo: 1000000000000000000000\n"
        );
    }

    #[test]
    fn non_one_step_bytes_render_as_rest() {
        let mut raw = [0u8; 16];
        raw[0] = 1;
        raw[1] = 2;
        raw[2] = 0xFF;
        let p = pattern("v", 1.0, &[(9, "odd", raw)]);
        assert_eq!(step_grid(&p.tracks()[0]), "|x---|----|----|----|");
    }

    #[test]
    fn render_track_uses_tab_separator() {
        let p = pattern("v", 1.0, &[(40, "hh-close", steps("x-x-x-x-x-x-x-x-"))]);
        assert_eq!(
            TextRenderer::render_track(&p.tracks()[0]),
            "(40) hh-close\t|x-x-|x-x-|x-x-|x-x-|"
        );
    }
}
