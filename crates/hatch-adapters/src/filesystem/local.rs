//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use hatch_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{HatchError, HatchResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> HatchResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> HatchResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

pub(crate) fn map_io_error(path: &Path, e: io::Error, operation: &str) -> HatchError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_nested_file_after_creating_parent() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let lib = dir.path().join("app/lib");

        fs.create_dir_all(&lib).unwrap();
        fs.write_file(&lib.join("app.ex"), "defmodule App do\nend\n")
            .unwrap();

        assert!(fs.is_dir(&lib));
        assert!(lib.join("app.ex").is_file());
        assert!(!fs.is_dir(&lib.join("app.ex")));
    }

    #[test]
    fn write_overwrites_existing_content() {
        let dir = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let file = dir.path().join("README.md");

        fs.write_file(&file, "old").unwrap();
        fs.write_file(&file, "new").unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "new");
    }

    #[test]
    fn missing_parent_is_a_filesystem_error() {
        let dir = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&dir.path().join("nope/file"), "x")
            .unwrap_err();

        assert!(matches!(
            err,
            HatchError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
