use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn hash_bytes(content: &[u8]) -> String {
    blake3::hash(content).to_hex().to_string()
}

pub fn hash_file(path: &Path) -> Result<String> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(hash_bytes(&content))
}

/// True unless `path` already holds exactly `rendered`.
///
/// An unreadable destination counts as changed so the write reports the failure.
pub fn needs_write(path: &Path, rendered: &str) -> bool {
    if !path.exists() {
        return true;
    }

    match hash_file(path) {
        Ok(existing) => existing != hash_bytes(rendered.as_bytes()),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Cannot hash existing output");
            true
        }
    }
}
