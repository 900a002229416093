//! Shared fixtures for the adapter integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use stackcraft_adapters::MemoryFilesystem;
use stackcraft_core::application::{ApplicationError, CommandOutput, CommandSpec, ProcessRunner};
use stackcraft_core::error::StackResult;

pub const TEMPLATES: &str = "/templates";
pub const WORKSPACE: &str = "/work";

pub const BASE_MANIFEST: &str = r#"{
  "name": "app",
  "version": "0.1.0",
  "type": "module",
  "scripts": {
    "dev": "bun run --watch src/index.ts"
  }
}
"#;

/// A memory filesystem holding a small but complete template tree.
pub fn seeded_filesystem() -> MemoryFilesystem {
    let fs = MemoryFilesystem::new();
    let t = Path::new(TEMPLATES);

    for base in ["base", "base-express", "base-bun-native"] {
        fs.seed(t.join(base).join("package.json"), BASE_MANIFEST);
        fs.seed(t.join(base).join("tsconfig.json"), "{}\n");
        fs.seed(t.join(base).join(".gitignore"), "node_modules\ndist\n");
        fs.seed(t.join(base).join("src/index.ts"), "// entry\n");
    }

    let postgres = t.join("extras/database/postgres");
    fs.seed(postgres.join("src/db/index.ts"), "// postgres client\n");
    fs.seed(postgres.join("drizzle.config.ts"), "// drizzle\n");
    fs.seed(postgres.join("README.md"), "not a config file\n");

    let sqlite = t.join("extras/database/sqlite");
    fs.seed(sqlite.join("src/db/index.ts"), "// sqlite client\n");
    fs.seed(sqlite.join("drizzle.config.ts"), "// drizzle\n");

    fs.seed(t.join("extras/testing/vitest/vitest.config.ts"), "// vitest\n");
    fs.seed(t.join("extras/validation/zod/src/middleware/validate.ts"), "// zod\n");

    fs
}

/// A memory filesystem with a project root that already holds the base
/// manifest, for exercising the merger and installers directly.
pub fn project_filesystem(root: &Path) -> MemoryFilesystem {
    let fs = seeded_filesystem();
    fs.seed(root.join("package.json"), BASE_MANIFEST);
    fs
}

pub fn templates() -> PathBuf {
    PathBuf::from(TEMPLATES)
}

/// Records every command and answers from a fixed script.
#[derive(Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<CommandSpec>>>,
    fail_program: Option<&'static str>,
    missing_program: Option<&'static str>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every invocation of `program` exits non-zero.
    pub fn failing(program: &'static str) -> Self {
        Self {
            fail_program: Some(program),
            ..Self::default()
        }
    }

    /// `program` cannot be started at all.
    pub fn missing(program: &'static str) -> Self {
        Self {
            missing_program: Some(program),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(CommandSpec::display)
            .collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> StackResult<CommandOutput> {
        self.calls.lock().unwrap().push(command.clone());

        if self.missing_program == Some(command.program.as_str()) {
            return Err(ApplicationError::CommandFailed {
                command: command.display(),
                reason: "No such file or directory (os error 2)".into(),
            }
            .into());
        }

        let success = self.fail_program != Some(command.program.as_str());
        Ok(CommandOutput {
            success,
            code: Some(if success { 0 } else { 1 }),
            stderr: if success { String::new() } else { "boom".into() },
        })
    }
}
