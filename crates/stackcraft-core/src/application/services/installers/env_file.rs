use tracing::info;

use crate::application::services::installers::{InstallContext, Installer};
use crate::application::services::manifest_merger::ENV_EXAMPLE_FILE;
use crate::domain::{Category, Contribution, FeatureSelection};
use crate::error::StackResult;

pub const ENV_FILE: &str = ".env";

pub const ENV_FILE_HINT: &str =
    "# Copy values from .env.example and fill in your actual credentials\n";

/// Runs last: makes sure both env files exist without touching either if
/// it is already there.
pub struct EnvFileInstaller;

impl Installer for EnvFileInstaller {
    fn category(&self) -> Category {
        Category::EnvFile
    }

    fn contributions(&self, _selection: &FeatureSelection) -> Vec<Contribution> {
        Vec::new()
    }

    fn install(&self, ctx: &InstallContext<'_>, _selection: &FeatureSelection) -> StackResult<()> {
        let env = ctx.root.join(ENV_FILE);
        if !ctx.fs.exists(&env) {
            info!("Creating .env");
            ctx.fs.write_file(&env, ENV_FILE_HINT)?;
        }

        // No installer appended anything.
        let example = ctx.root.join(ENV_EXAMPLE_FILE);
        if !ctx.fs.exists(&example) {
            ctx.fs.write_file(&example, "")?;
        }
        Ok(())
    }
}
