use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;

const BOM: &str = "\u{FEFF}";

/// Read a database file in full. `-` reads stdin.
pub fn read_source(path: &Path) -> anyhow::Result<String> {
    let bytes = if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
    };

    tracing::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(decode_text(&bytes))
}

/// Decode bytes as UTF-8 the way a browser reads a text file: a leading BOM
/// is dropped and invalid sequences become U+FFFD.
pub fn decode_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text.into_owned(),
    }
}
