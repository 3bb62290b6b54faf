/// Implementation of `splice show`.
///
/// Decodes a pattern file and renders it with `DefaultRenderer`. Text
/// mode prints the classic step grid:
///
/// ```text
/// Saved with HW Version: 0.808-alpha
/// Tempo: 120
/// (0) kick	|x---|x---|x---|x---|
/// (1) snare	|----|x---|----|x---|
/// ```
use std::fs;
use std::io::{self, Write as _};

use anyhow::{Context, Result, anyhow};
use splice_decoder::SpliceDecoder;
use splice_render::{DefaultRenderer, OutputMode, PatternRenderer, RenderConfig};

use crate::ShowArgs;

/// Run the `splice show` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, a flag value
/// is not recognised, or the output cannot be written.
pub fn run(args: &ShowArgs) -> Result<()> {
    let pattern = SpliceDecoder::decode_file(&args.file)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    let config = RenderConfig {
        mode: parse_output_mode(&args.format)?,
        include_tracks: args.tracks.as_deref().map(parse_track_ids).transpose()?,
    };
    tracing::debug!(mode = ?config.mode, filter = ?config.include_tracks, "rendering pattern");

    let rendered = DefaultRenderer
        .render(&pattern, &config)
        .context("render failed")?;

    if let Some(path) = &args.output {
        fs::write(path, rendered.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(rendered.as_bytes())
            .context("cannot write to stdout")?;
        if !rendered.ends_with('\n') {
            handle.write_all(b"\n").context("cannot write to stdout")?;
        }
    }

    Ok(())
}

// ── Flag parsers ──────────────────────────────────────────────────────────────

/// Parses the `--format` string to an [`OutputMode`].
fn parse_output_mode(s: &str) -> Result<OutputMode> {
    match s.to_lowercase().as_str() {
        "text" | "txt" => Ok(OutputMode::Text),
        "json" => Ok(OutputMode::Json),
        _ => Err(anyhow!("unknown format {s:?}, expected text|json")),
    }
}

/// Parses a comma-separated `--tracks` string to a list of track ids.
fn parse_track_ids(s: &str) -> Result<Vec<u8>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|token| {
            token
                .parse::<u8>()
                .with_context(|| format!("invalid track id {token:?}, expected 0-255"))
        })
        .collect()
}
