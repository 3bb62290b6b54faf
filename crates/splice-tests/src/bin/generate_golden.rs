//! Writes the golden `.splice` fixtures used by the conformance tests.
//!
//! ```bash
//! cargo run -p splice-tests --bin generate_golden
//! ```
//!
//! Output lands in `crates/splice-tests/tests/golden/`. The files are
//! committed; rerun this only when a fixture definition changes, then
//! review the snapshot diffs with `cargo insta review`.

use std::fs;
use std::path::Path;

use splice_tests::{edge_case_fixtures, golden_fixtures};

fn main() -> std::io::Result<()> {
    let golden = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden");
    let edge = golden.join("edge_cases");
    fs::create_dir_all(&edge)?;

    for (name, bytes) in golden_fixtures() {
        let path = golden.join(format!("{name}.splice"));
        fs::write(&path, &bytes)?;
        println!("wrote {} ({} bytes)", path.display(), bytes.len());
    }

    for (name, bytes) in edge_case_fixtures() {
        let path = edge.join(format!("{name}.splice"));
        fs::write(&path, &bytes)?;
        println!("wrote {} ({} bytes)", path.display(), bytes.len());
    }

    Ok(())
}
