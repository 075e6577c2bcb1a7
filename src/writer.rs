use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
#[error("Failed to write {}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Write the rendered artifact, creating parent directories. No retry.
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), WriteError> {
    let wrap = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, contents).map_err(wrap)?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote artifact");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("src/services/mockData.js");

        write_artifact(&path, "export const mockPosts = [];").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "export const mockPosts = [];"
        );
    }

    #[test]
    fn test_unwritable_destination() {
        let temp = TempDir::new().unwrap();
        // A regular file cannot act as a directory
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("mockData.js");

        let err = write_artifact(&path, "x").unwrap_err();
        assert_eq!(err.path, path);
        assert!(err.to_string().starts_with("Failed to write"));
    }

    #[test]
    fn test_directory_destination() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("outdir");
        fs::create_dir(&dir).unwrap();

        let err = write_artifact(&dir, "x").unwrap_err();
        assert_eq!(err.path, dir);
        assert_eq!(err.to_string(), format!("Failed to write {}", dir.display()));
    }
}
