//! Every write to the project's shared files goes through here.
//!
//! Installers never read or write `package.json`, `.env.example` or
//! `.gitignore` themselves. Each call is a whole-file read-modify-write, so
//! callers must not run concurrently against the same project.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::application::ports::Filesystem;
use crate::domain::{Manifest, PackageMap};
use crate::error::StackResult;

pub const MANIFEST_FILE: &str = "package.json";
pub const ENV_EXAMPLE_FILE: &str = ".env.example";
pub const GITIGNORE_FILE: &str = ".gitignore";

const GITIGNORE_HEADER: &str = "# Added by stackcraft";

pub struct ManifestMerger<'a> {
    fs: &'a dyn Filesystem,
}

impl<'a> ManifestMerger<'a> {
    pub fn new(fs: &'a dyn Filesystem) -> Self {
        Self { fs }
    }

    pub fn manifest_path(root: &Path) -> PathBuf {
        root.join(MANIFEST_FILE)
    }

    /// Load and parse the manifest. Any failure is fatal to the run.
    pub fn read(&self, root: &Path) -> StackResult<Manifest> {
        let raw = self.fs.read_to_string(&Self::manifest_path(root))?;
        Ok(Manifest::parse(&raw)?)
    }

    /// Write the whole manifest back.
    pub fn write(&self, root: &Path, manifest: &Manifest) -> StackResult<()> {
        self.fs
            .write_file(&Self::manifest_path(root), &manifest.to_pretty_string()?)
    }

    /// Union `deps`/`dev_deps` into the manifest; both sections end sorted.
    pub fn merge_dependencies(
        &self,
        root: &Path,
        deps: &PackageMap,
        dev_deps: &PackageMap,
    ) -> StackResult<()> {
        if deps.is_empty() && dev_deps.is_empty() {
            return Ok(());
        }
        let mut manifest = self.read(root)?;
        manifest.merge_dependencies(deps, dev_deps)?;
        debug!(
            dependencies = deps.len(),
            dev_dependencies = dev_deps.len(),
            "Merged dependencies"
        );
        self.write(root, &manifest)
    }

    /// Plain key-value merge into `scripts`.
    pub fn merge_scripts(&self, root: &Path, scripts: &[(&str, &str)]) -> StackResult<()> {
        if scripts.is_empty() {
            return Ok(());
        }
        let mut manifest = self.read(root)?;
        manifest.merge_scripts(scripts.iter().copied())?;
        self.write(root, &manifest)
    }

    /// Set the manifest `name`, writing a minimal manifest if none exists.
    pub fn set_name(&self, root: &Path, name: &str) -> StackResult<()> {
        let manifest = if self.fs.exists(&Self::manifest_path(root)) {
            let mut manifest = self.read(root)?;
            manifest.set_name(name);
            manifest
        } else {
            debug!("Template has no manifest; writing a minimal one");
            Manifest::minimal(name)
        };
        self.write(root, &manifest)
    }

    /// Append `text` verbatim to `.env.example`, creating it if absent.
    pub fn append_env_block(&self, root: &Path, text: &str) -> StackResult<()> {
        self.fs.append_file(&root.join(ENV_EXAMPLE_FILE), text)
    }

    /// Ensure `entry` appears in `.gitignore`. Returns whether it was added.
    pub fn ensure_gitignore_entry(&self, root: &Path, entry: &str) -> StackResult<bool> {
        Ok(!self.ensure_gitignore_entries(root, &[entry])?.is_empty())
    }

    /// Append every entry not already present (by substring) under one
    /// comment header. Returns the entries that were added.
    pub fn ensure_gitignore_entries<'e>(
        &self,
        root: &Path,
        entries: &[&'e str],
    ) -> StackResult<Vec<&'e str>> {
        let path = root.join(GITIGNORE_FILE);
        let existing = if self.fs.exists(&path) {
            self.fs.read_to_string(&path)?
        } else {
            String::new()
        };

        let mut missing: Vec<&'e str> = Vec::new();
        for &entry in entries {
            if !existing.contains(entry) && !missing.contains(&entry) {
                missing.push(entry);
            }
        }
        if missing.is_empty() {
            return Ok(missing);
        }

        let mut block = String::new();
        if !existing.is_empty() {
            if !existing.ends_with('\n') {
                block.push('\n');
            }
            block.push('\n');
        }
        block.push_str(GITIGNORE_HEADER);
        block.push('\n');
        for entry in &missing {
            block.push_str(entry);
            block.push('\n');
        }
        self.fs.append_file(&path, &block)?;
        debug!(entries = ?missing, "Extended .gitignore");
        Ok(missing)
    }
}
