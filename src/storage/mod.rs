//! Output file writing.

use crate::engine::OsErrorDisplay;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Could not write to file - {}", OsErrorDisplay(.source))]
    Write { path: PathBuf, source: io::Error },
}

impl StorageError {
    pub fn path(&self) -> &Path {
        let StorageError::Write { path, .. } = self;
        path
    }
}

/// Writes `output` to `path` exactly as given, replacing any existing file.
/// No trailing newline is added.
pub fn write_output(path: &Path, output: &str) -> Result<(), StorageError> {
    let to_storage_error = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(to_storage_error)?;
    file.write_all(output.as_bytes()).map_err(to_storage_error)?;
    file.flush().map_err(to_storage_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_write_output_exact_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");

        write_output(&path, "dcba xy").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "dcba xy");
    }

    #[test]
    fn test_write_output_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");
        fs::write(&path, "a much longer previous run").unwrap();

        write_output(&path, "short").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "short");
    }

    #[test]
    fn test_write_empty_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.txt");

        write_output(&path, "").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("output.txt");

        let err = write_output(&path, "text").unwrap_err();
        let StorageError::Write { source, .. } = &err;
        assert_eq!(source.kind(), io::ErrorKind::NotFound);
        assert_eq!(err.path(), path);
        assert!(err
            .to_string()
            .starts_with("Could not write to file - (2): "));
    }
}
