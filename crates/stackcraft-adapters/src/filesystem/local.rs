//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use stackcraft_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StackResult, StackcraftError},
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
    fn create_dir_all(&self, path: &Path) -> StackResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> StackResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn append_file(&self, path: &Path, content: &str) -> StackResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| map_io_error(path, e, "open file for append"))?;
        file.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "append to file"))
    }

    fn read_to_string(&self, path: &Path) -> StackResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    /// Byte copy, so binary template assets survive.
    fn copy_file(&self, from: &Path, to: &Path) -> StackResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(from, e, "copy file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> StackResult<Vec<PathBuf>> {
        let mut entries = std::fs::read_dir(path)
            .map_err(|e| map_io_error(path, e, "read directory"))?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<io::Result<Vec<_>>>()
            .map_err(|e| map_io_error(path, e, "read directory entry"))?;
        entries.sort();
        Ok(entries)
    }

    fn walk_files(&self, root: &Path) -> StackResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: e.path().unwrap_or(root).to_path_buf(),
                reason: format!("Failed to walk directory: {e}"),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(root) {
                files.push(relative.to_path_buf());
            }
        }
        Ok(files)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StackcraftError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_creates_then_extends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.example");
        let fs = LocalFilesystem::new();

        fs.append_file(&path, "A=1\n").unwrap();
        fs.append_file(&path, "B=2\n").unwrap();
        assert_eq!(fs.read_to_string(&path).unwrap(), "A=1\nB=2\n");
    }

    #[test]
    fn walk_files_returns_sorted_relative_paths() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        fs.create_dir_all(&dir.path().join("src/db")).unwrap();
        fs.write_file(&dir.path().join("src/db/index.ts"), "").unwrap();
        fs.write_file(&dir.path().join("drizzle.config.ts"), "").unwrap();

        assert_eq!(
            fs.walk_files(dir.path()).unwrap(),
            vec![
                PathBuf::from("drizzle.config.ts"),
                PathBuf::from("src/db/index.ts")
            ]
        );
    }

    #[test]
    fn reading_missing_file_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&dir.path().join("package.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            StackcraftError::Application(ApplicationError::FilesystemError { .. })
        ));
    }
}
