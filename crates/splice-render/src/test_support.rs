use splice_decoder::{Pattern, SpliceDecoder};

/// Assemble and decode a pattern from `(id, name, steps)` tuples.
pub fn pattern(version: &str, tempo: f32, tracks: &[(u8, &str, [u8; 16])]) -> Pattern {
    let mut body = version.as_bytes().to_vec();
    body.resize(32, 0);
    body.extend_from_slice(&tempo.to_le_bytes());
    for (id, name, steps) in tracks {
        body.push(*id);
        body.extend_from_slice(&u32::try_from(name.len()).unwrap().to_be_bytes());
        body.extend_from_slice(name.as_bytes());
        body.extend_from_slice(steps);
    }

    let mut bytes = b"SPLICE".to_vec();
    bytes.extend_from_slice(&(body.len() as u64).to_be_bytes());
    bytes.extend_from_slice(&body);
    SpliceDecoder::decode(&bytes).unwrap()
}

/// Parse a 16-character `x`/`-` grid into step bytes.
pub fn steps(grid: &str) -> [u8; 16] {
    let mut out = [0u8; 16];
    for (slot, c) in out.iter_mut().zip(grid.chars().filter(|c| *c != '|')) {
        *slot = u8::from(c == 'x');
    }
    out
}
