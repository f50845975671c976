//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod analyze;
pub mod info;
pub mod rhymes;
pub mod stems;
pub mod syllables;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}
