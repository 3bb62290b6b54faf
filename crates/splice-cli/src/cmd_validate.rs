/// Implementation of `splice validate`.
///
/// Runs a full decode and reports either a series of check marks or a
/// single diagnostic line.
///
/// # Success output
///
/// ```text
/// ✓ Header: valid SPLICE tag, body length 197
/// ✓ Tracks: 6 tracks parsed successfully
/// ✓ Framing: body ends exactly after the last track
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: truncated input: track steps at offset 203 (needed 16 bytes, 8 available)
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use splice_decoder::{DecodeError, SpliceDecoder};

use crate::ValidateArgs;

/// Run the `splice validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or fails to decode.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    match SpliceDecoder::decode_with_layout(&bytes) {
        Ok((pattern, layout)) => {
            println!(
                "✓ Header: valid SPLICE tag, body length {}",
                layout.body_len
            );
            println!(
                "✓ Tracks: {} track{} parsed successfully",
                pattern.tracks().len(),
                if pattern.tracks().len() == 1 { "" } else { "s" }
            );
            match (layout.record_overshoot(), layout.overshoot) {
                (Some(over), _) => println!(
                    "! Framing: last track ended {over} bytes past the declared body"
                ),
                (None, Some(_)) => println!(
                    "✓ Framing: body length {} holds no tracks",
                    layout.body_len
                ),
                (None, None) => println!("✓ Framing: body ends exactly after the last track"),
            }
            if layout.trailing > 0 {
                println!("! Trailing: {} bytes after the body ignored", layout.trailing);
            }
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {}", decode_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a `DecodeError` into a one-line diagnostic.
fn decode_error_diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::InvalidHeader { found } => {
            format!("not a SPLICE file (tag {:?})", String::from_utf8_lossy(found))
        }
        DecodeError::TruncatedInput {
            field,
            offset,
            needed,
            available,
        } => format!(
            "truncated input: {field} at offset {offset} (needed {needed} bytes, {available} available)"
        ),
        DecodeError::MalformedField {
            field,
            offset,
            reason,
        } => format!("malformed {field} at offset {offset}: {reason}"),
    }
}
