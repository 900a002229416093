//! Copies template directories into the destination, first writer wins.
//!
//! A destination path that already exists is never touched: no overwrite, no
//! error. A missing template directory is a warning, not a failure; not
//! every provider ships every kind of file.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::application::ports::Filesystem;
use crate::error::StackResult;

/// Root-level file extensions copied by [`TemplateCopier::copy_root_files`].
pub const CONFIG_EXTENSIONS: &[&str] = &["ts", "json"];

/// Subtree holding a template's source fragment.
pub const SOURCE_DIR: &str = "src";

/// What a copy did, relative to the destination root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub source_missing: bool,
}

impl CopyReport {
    fn missing() -> Self {
        Self {
            source_missing: true,
            ..Self::default()
        }
    }

    fn absorb(&mut self, other: CopyReport) {
        self.copied.extend(other.copied);
        self.skipped.extend(other.skipped);
        self.source_missing |= other.source_missing;
    }
}

pub struct TemplateCopier<'a> {
    fs: &'a dyn Filesystem,
    template_root: &'a Path,
}

impl<'a> TemplateCopier<'a> {
    pub fn new(fs: &'a dyn Filesystem, template_root: &'a Path) -> Self {
        Self { fs, template_root }
    }

    pub fn template_path(&self, template: &str) -> PathBuf {
        self.template_root.join(template)
    }

    /// Recursively copy the whole `template` directory into `dest`.
    pub fn copy(&self, template: &str, dest: &Path) -> StackResult<CopyReport> {
        let source = self.template_path(template);
        if !self.fs.is_dir(&source) {
            warn!(template, path = %source.display(), "Template directory not found, skipping");
            return Ok(CopyReport::missing());
        }
        self.copy_tree(&source, dest)
    }

    /// Copy only `template/<subdir>` into `dest/<subdir>`.
    pub fn copy_subdir(&self, template: &str, subdir: &str, dest: &Path) -> StackResult<CopyReport> {
        let source = self.template_path(template).join(subdir);
        if !self.fs.is_dir(&source) {
            warn!(template, subdir, "Template subtree not found, skipping");
            return Ok(CopyReport::missing());
        }
        let report = self.copy_tree(&source, &dest.join(subdir))?;
        Ok(CopyReport {
            copied: report.copied.into_iter().map(|p| Path::new(subdir).join(p)).collect(),
            skipped: report.skipped.into_iter().map(|p| Path::new(subdir).join(p)).collect(),
            source_missing: false,
        })
    }

    /// Copy loose files at the top of `template` whose extension is in
    /// `extensions`. Subdirectories are ignored.
    pub fn copy_root_files(
        &self,
        template: &str,
        extensions: &[&str],
        dest: &Path,
    ) -> StackResult<CopyReport> {
        let source = self.template_path(template);
        if !self.fs.is_dir(&source) {
            warn!(template, "Template directory not found, skipping config files");
            return Ok(CopyReport::missing());
        }

        let mut report = CopyReport::default();
        for entry in self.fs.list_dir(&source)? {
            if self.fs.is_dir(&entry) {
                continue;
            }
            let matches = entry
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| extensions.contains(&ext));
            let Some(file_name) = entry.file_name() else {
                continue;
            };
            if matches {
                self.copy_one(&entry, dest, Path::new(file_name), &mut report)?;
            }
        }
        Ok(report)
    }

    /// A feature's fragment: its `src` subtree, plus root config files when
    /// `with_config`.
    ///
    /// Warns once when the template directory itself is missing. A template
    /// without `src` is normal (config-only providers) and only logged at
    /// debug level.
    pub fn copy_fragment(
        &self,
        template: &str,
        dest: &Path,
        with_config: bool,
    ) -> StackResult<CopyReport> {
        let source = self.template_path(template);
        if !self.fs.is_dir(&source) {
            warn!(template, path = %source.display(), "Template directory not found, skipping");
            return Ok(CopyReport::missing());
        }

        let mut report = if self.fs.is_dir(&source.join(SOURCE_DIR)) {
            self.copy_subdir(template, SOURCE_DIR, dest)?
        } else {
            debug!(template, "No source fragment");
            CopyReport::default()
        };
        if with_config {
            report.absorb(self.copy_root_files(template, CONFIG_EXTENSIONS, dest)?);
        }
        Ok(report)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn copy_tree(&self, source: &Path, dest: &Path) -> StackResult<CopyReport> {
        let mut report = CopyReport::default();
        self.fs.create_dir_all(dest)?;
        for relative in self.fs.walk_files(source)? {
            self.copy_one(&source.join(&relative), dest, &relative, &mut report)?;
        }
        Ok(report)
    }

    fn copy_one(
        &self,
        from: &Path,
        dest_root: &Path,
        relative: &Path,
        report: &mut CopyReport,
    ) -> StackResult<()> {
        let to = dest_root.join(relative);
        if self.fs.exists(&to) {
            debug!(path = %to.display(), "Exists, not overwriting");
            report.skipped.push(relative.to_path_buf());
            return Ok(());
        }
        if let Some(parent) = to.parent() {
            self.fs.create_dir_all(parent)?;
        }
        self.fs.copy_file(from, &to)?;
        report.copied.push(relative.to_path_buf());
        Ok(())
    }
}
