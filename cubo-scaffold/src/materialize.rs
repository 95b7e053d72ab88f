//! First-write-wins file creation
//!
//! Generated files are written once. Anything already on disk, whether from an
//! earlier run or edited by hand, is left exactly as it is.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::error::{Result, ScaffoldError};

/// What happened to a materialized file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file did not exist and was written
    Created,
    /// The file already existed and was not touched
    Skipped,
}

/// Write `content` to `path` unless something already exists there
///
/// Missing ancestor directories are created first. The existence check and
/// the create are a single `create_new` open, so an existing file is never
/// truncated.
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if a directory cannot be created or the file
/// cannot be written.
pub fn write_if_absent(path: &Path, content: &str) -> Result<WriteOutcome> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            tracing::debug!(path = %path.display(), "file exists, skipping");
            return Ok(WriteOutcome::Skipped);
        }
        Err(e) => return Err(ScaffoldError::io(path, e)),
    };

    file.write_all(content.as_bytes())
        .map_err(|e| ScaffoldError::io(path, e))?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "file created");
    Ok(WriteOutcome::Created)
}

/// Create `path` and its ancestors, returning whether anything was created
///
/// # Errors
///
/// Returns [`ScaffoldError::Io`] if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|e| ScaffoldError::io(path, e))?;
    tracing::debug!(path = %path.display(), "directory created");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_creates_missing_parents() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("a/b/c/pom.xml");

        let outcome = write_if_absent(&path, "<project/>").unwrap();

        assert_eq!(outcome, WriteOutcome::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<project/>");
    }

    #[test]
    fn test_second_write_is_skipped() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("pom.xml");

        assert_eq!(write_if_absent(&path, "first").unwrap(), WriteOutcome::Created);
        assert_eq!(write_if_absent(&path, "first").unwrap(), WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "first");
    }

    #[test]
    fn test_existing_content_wins() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("Hand.java");
        fs::write(&path, "// edited by hand").unwrap();

        let outcome = write_if_absent(&path, "// generated").unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "// edited by hand");
    }

    #[test]
    fn test_ensure_dir_reports_creation() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("src/main/resources");

        assert!(ensure_dir(&path).unwrap());
        assert!(path.is_dir());
        assert!(!ensure_dir(&path).unwrap());
    }
}
