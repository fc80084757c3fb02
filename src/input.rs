use std::fs;
use std::path::Path;

use anyhow::Context;
use log::debug;

/// Read a liveness file into memory.
pub fn read_file(path: &Path) -> anyhow::Result<String> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("unable to read liveness input `{}`", path.display()))?;

    debug!("read {} bytes from {}", source.len(), path.display());
    Ok(source)
}
