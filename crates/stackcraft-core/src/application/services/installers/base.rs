use tracing::info;

use crate::application::services::installers::{InstallContext, Installer};
use crate::domain::catalog::framework_def;
use crate::domain::entities::contribution::resolve;
use crate::domain::{Category, Contribution, FeatureSelection};
use crate::error::StackResult;

/// Ignore entries every project gets.
pub const BASE_GITIGNORE: &[&str] = &["node_modules", ".env"];

/// Framework dependencies and baseline ignore entries.
///
/// The base template itself is copied by the orchestrator before the plan
/// runs, because the destination checks must happen first.
pub struct BaseInstaller;

impl Installer for BaseInstaller {
    fn category(&self) -> Category {
        Category::Base
    }

    fn contributions(&self, _selection: &FeatureSelection) -> Vec<Contribution> {
        Vec::new()
    }

    fn install(&self, ctx: &InstallContext<'_>, selection: &FeatureSelection) -> StackResult<()> {
        let def = framework_def(selection.framework());
        info!(framework = %def.framework, "Installing framework dependencies");

        let merger = ctx.merger();
        merger.merge_dependencies(
            ctx.root,
            &resolve(def.dependencies),
            &resolve(def.dev_dependencies),
        )?;
        merger.ensure_gitignore_entries(ctx.root, BASE_GITIGNORE)?;
        Ok(())
    }
}
