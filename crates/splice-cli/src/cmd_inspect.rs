/// Implementation of `splice inspect`.
///
/// Decodes a pattern file and prints where everything sits in the frame.
///
/// # Output format
///
/// ```text
/// Header: SPLICE, body length 197 (body 14..211)
/// Version: "0.808-alpha"
/// Tempo: 120
/// Track 0 @ 50: id=0 name="kick" hits=4
/// Track 1 @ 75: id=1 name="snare" hits=2
/// ---
/// Consumed 211 of 261 bytes, 50 trailing bytes ignored
/// ```
use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result};
use splice_decoder::SpliceDecoder;

use crate::InspectArgs;

/// Run the `splice inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid pattern.
pub fn run(args: &InspectArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let (pattern, layout) = SpliceDecoder::decode_with_layout(&bytes)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    println!(
        "Header: SPLICE, body length {} (body {}..{})",
        layout.body_len, layout.body_start, layout.body_end
    );
    println!("Version: {:?}", pattern.version());
    println!("Tempo: {}", pattern.tempo());

    for (idx, (track, offset)) in pattern
        .tracks()
        .iter()
        .zip(&layout.track_offsets)
        .enumerate()
    {
        println!(
            "Track {idx} @ {offset}: id={} name={:?} hits={}",
            track.id(),
            track.name(),
            track.active_steps().count()
        );
    }

    println!("---");
    println!(
        "Consumed {} of {} bytes, {} trailing byte{} ignored",
        layout.consumed,
        bytes.len(),
        layout.trailing,
        if layout.trailing == 1 { "" } else { "s" }
    );
    if let Some(over) = layout.overshoot {
        println!("Overshoot: last read ended {over} bytes past the declared body");
    }

    if args.show_trailing && layout.trailing > 0 {
        let start = layout.consumed.max(layout.body_end);
        println!("Trailing bytes:");
        for line in hex_dump(&bytes[start..], start) {
            println!("  {line}");
        }
    }

    Ok(())
}

/// Format `data` as 16-byte-per-line hex with an ASCII gutter. Offsets
/// are printed relative to the start of the file.
fn hex_dump(data: &[u8], base: usize) -> Vec<String> {
    data.chunks(16)
        .enumerate()
        .map(|(i, chunk)| {
            let hex = chunk
                .iter()
                .fold(String::with_capacity(chunk.len() * 3), |mut s, b| {
                    if !s.is_empty() {
                        s.push(' ');
                    }
                    let _ = write!(s, "{b:02x}");
                    s
                });
            let ascii: String = chunk
                .iter()
                .map(|&b| if b.is_ascii_graphic() { b as char } else { '.' })
                .collect();
            format!("{:04x}  {hex:<47}  {ascii}", base + i * 16)
        })
        .collect()
}
