//! Category installers.
//!
//! One installer per [`Category`]. A feature installer only turns the
//! selected features of its own category into [`Contribution`]s through an
//! exhaustive `match`; [`apply_contribution`] is the single place those
//! contributions reach the disk.

mod ai;
mod auth;
mod base;
mod cloud;
mod database;
mod docs;
mod email;
mod env_file;
mod observability;
mod queue;
mod ratelimit;
mod realtime;
mod testing;
mod validation;

use std::path::Path;

use tracing::{debug, info};

pub use ai::AiInstaller;
pub use auth::AuthInstaller;
pub use base::{BASE_GITIGNORE, BaseInstaller};
pub use cloud::CloudInstaller;
pub use database::{DatabaseInstaller, MIGRATION_SCRIPTS, SQLITE_DATA_DIR};
pub use docs::DocsInstaller;
pub use email::EmailInstaller;
pub use env_file::{ENV_FILE, ENV_FILE_HINT, EnvFileInstaller};
pub use observability::ObservabilityInstaller;
pub use queue::QueueInstaller;
pub use ratelimit::RateLimitInstaller;
pub use realtime::RealtimeInstaller;
pub use testing::TestingInstaller;
pub use validation::ValidationInstaller;

use crate::application::ports::Filesystem;
use crate::application::services::manifest_merger::ManifestMerger;
use crate::application::services::template_copier::TemplateCopier;
use crate::domain::{Category, Contribution, CopyMode, FeatureSelection};
use crate::error::StackResult;

/// Everything an installer may touch.
#[derive(Clone, Copy)]
pub struct InstallContext<'a> {
    pub fs: &'a dyn Filesystem,
    pub template_root: &'a Path,
    pub root: &'a Path,
}

impl<'a> InstallContext<'a> {
    pub fn new(fs: &'a dyn Filesystem, template_root: &'a Path, root: &'a Path) -> Self {
        Self {
            fs,
            template_root,
            root,
        }
    }

    pub fn copier(&self) -> TemplateCopier<'a> {
        TemplateCopier::new(self.fs, self.template_root)
    }

    pub fn merger(&self) -> ManifestMerger<'a> {
        ManifestMerger::new(self.fs)
    }
}

pub trait Installer: Send + Sync {
    fn category(&self) -> Category;

    /// Contributions for the selected features this installer governs.
    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution>;

    fn install(&self, ctx: &InstallContext<'_>, selection: &FeatureSelection) -> StackResult<()> {
        for contribution in self.contributions(selection) {
            apply_contribution(ctx, &contribution)?;
        }
        Ok(())
    }
}

/// Apply one feature's changes: copy, dependencies, env block, scripts,
/// ignore entries, local directories.
pub fn apply_contribution(ctx: &InstallContext<'_>, contribution: &Contribution) -> StackResult<()> {
    let feature = contribution.feature;
    info!(%feature, category = %feature.category(), "Installing feature");

    let template = contribution.template_dir();
    let with_config = contribution.copy_mode == CopyMode::SourceAndConfig;
    let report = ctx.copier().copy_fragment(&template, ctx.root, with_config)?;
    debug!(
        copied = report.copied.len(),
        skipped = report.skipped.len(),
        "Template fragment copied"
    );

    let merger = ctx.merger();
    merger.merge_dependencies(
        ctx.root,
        &contribution.resolved_dependencies(),
        &contribution.resolved_dev_dependencies(),
    )?;

    if let Some(block) = &contribution.env {
        merger.append_env_block(ctx.root, &block.render())?;
    }

    merger.merge_scripts(ctx.root, contribution.scripts)?;

    if !contribution.gitignore.is_empty() {
        merger.ensure_gitignore_entries(ctx.root, contribution.gitignore)?;
    }

    for dir in contribution.directories {
        ctx.fs.create_dir_all(&ctx.root.join(dir))?;
    }
    Ok(())
}

/// The installer responsible for `category`.
pub fn installer_for(category: Category) -> Box<dyn Installer> {
    match category {
        Category::Base => Box::new(BaseInstaller),
        Category::Database => Box::new(DatabaseInstaller),
        Category::Auth => Box::new(AuthInstaller),
        Category::Ai => Box::new(AiInstaller),
        Category::Email => Box::new(EmailInstaller),
        Category::Cloud => Box::new(CloudInstaller),
        Category::Realtime => Box::new(RealtimeInstaller),
        Category::Queue => Box::new(QueueInstaller),
        Category::RateLimit => Box::new(RateLimitInstaller),
        Category::Observability => Box::new(ObservabilityInstaller),
        Category::Docs => Box::new(DocsInstaller),
        Category::Testing => Box::new(TestingInstaller),
        Category::Validation => Box::new(ValidationInstaller),
        Category::EnvFile => Box::new(EnvFileInstaller),
    }
}
