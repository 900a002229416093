//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stackcraft-adapters` crate provides implementations.

use crate::error::StackResult;
use std::path::{Path, PathBuf};

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackcraft_adapters::filesystem::LocalFilesystem` (production)
/// - `stackcraft_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Template sources and the destination project are both reached through
/// this one port, so a memory filesystem can hold both in tests.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StackResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> StackResult<()>;

    /// Append content to a file, creating it if absent.
    fn append_file(&self, path: &Path, content: &str) -> StackResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> StackResult<String>;

    /// Copy one file. Parent directories of `to` must exist.
    fn copy_file(&self, from: &Path, to: &Path) -> StackResult<()> {
        let content = self.read_to_string(from)?;
        self.write_file(to, &content)
    }

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Direct children of a directory, sorted.
    fn list_dir(&self, path: &Path) -> StackResult<Vec<PathBuf>>;

    /// Every file below `root`, as paths relative to `root`, sorted.
    fn walk_files(&self, root: &Path) -> StackResult<Vec<PathBuf>>;
}

/// A command to run in a working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl CommandSpec {
    pub fn new(program: &str, args: &[&str], cwd: &Path) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        }
    }

    /// `program arg1 arg2`, for logs and error messages.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a command finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    pub code: Option<i32>,
    pub stderr: String,
}

/// Port for running external programs (package manager, git).
///
/// Implemented by:
/// - `stackcraft_adapters::process::SystemProcessRunner` (production)
///
/// Returns `Err` only when the program could not be started. A program that
/// ran and failed comes back as `Ok` with `success == false`.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn run(&self, command: &CommandSpec) -> StackResult<CommandOutput>;
}
