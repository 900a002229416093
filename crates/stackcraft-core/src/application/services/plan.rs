//! Installer plan: which installers run, in what order.
//!
//! [`build_plan`] annotates every category with `in_use`; [`InstallerRunner`]
//! filters and executes. Execution is strictly one installer at a time.
//! Installers read-modify-write the same manifest and env file, so running
//! two at once would lose edits.

use serde::Serialize;
use tracing::{error, info, instrument};

use crate::application::services::installers::{InstallContext, Installer, installer_for};
use crate::domain::{Category, FeatureSelection};
use crate::error::StackResult;

pub struct InstallerDescriptor {
    pub category: Category,
    pub in_use: bool,
    installer: Box<dyn Installer>,
}

impl InstallerDescriptor {
    pub fn installer(&self) -> &dyn Installer {
        self.installer.as_ref()
    }
}

impl std::fmt::Debug for InstallerDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstallerDescriptor")
            .field("category", &self.category)
            .field("in_use", &self.in_use)
            .finish()
    }
}

/// Plain summary of one plan entry, for reports and `--dry-run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlannedInstaller {
    pub category: Category,
    pub in_use: bool,
}

/// Every category in fixed order, annotated with `in_use`.
#[derive(Debug)]
pub struct InstallerPlan {
    entries: Vec<InstallerDescriptor>,
}

impl InstallerPlan {
    pub fn entries(&self) -> &[InstallerDescriptor] {
        &self.entries
    }

    /// Entries that will run, in plan order.
    pub fn in_use(&self) -> impl Iterator<Item = &InstallerDescriptor> {
        self.entries.iter().filter(|e| e.in_use)
    }

    pub fn summary(&self) -> Vec<PlannedInstaller> {
        self.entries
            .iter()
            .map(|e| PlannedInstaller {
                category: e.category,
                in_use: e.in_use,
            })
            .collect()
    }
}

/// Build the full plan for `selection`.
///
/// A category is in use when the selection contains any feature it governs;
/// the base and env-file categories always are.
pub fn build_plan(selection: &FeatureSelection) -> InstallerPlan {
    let entries = Category::ALL
        .iter()
        .map(|&category| InstallerDescriptor {
            category,
            in_use: category.is_unconditional()
                || selection.intersects(category.governed_features()),
            installer: installer_for(category),
        })
        .collect();
    InstallerPlan { entries }
}

pub struct InstallerRunner;

impl InstallerRunner {
    /// Run the in-use entries in order, stopping at the first failure.
    ///
    /// Effects of installers that already finished stay on disk. Returns the
    /// categories that ran.
    #[instrument(skip_all, fields(root = %ctx.root.display()))]
    pub fn run(
        plan: &InstallerPlan,
        ctx: &InstallContext<'_>,
        selection: &FeatureSelection,
    ) -> StackResult<Vec<Category>> {
        let mut executed = Vec::new();
        for entry in plan.in_use() {
            info!(installer = %entry.category, "Running installer");
            if let Err(e) = entry.installer().install(ctx, selection) {
                error!(installer = %entry.category, error = %e, "Installer failed, aborting plan");
                return Err(e);
            }
            executed.push(entry.category);
        }
        Ok(executed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DatabaseFeature, Feature, Framework, TestingFeature};

    fn in_use(selection: &FeatureSelection) -> Vec<Category> {
        build_plan(selection).in_use().map(|e| e.category).collect()
    }

    #[test]
    fn empty_selection_runs_only_unconditional_installers() {
        assert_eq!(
            in_use(&FeatureSelection::new(Framework::Hono)),
            [Category::Base, Category::EnvFile]
        );
    }

    #[test]
    fn plan_covers_every_category_in_order() {
        let plan = build_plan(&FeatureSelection::new(Framework::Hono));
        let order: Vec<_> = plan.entries().iter().map(|e| e.category).collect();
        assert_eq!(order, Category::ALL);
    }

    #[test]
    fn selected_categories_keep_declared_order() {
        // Given in reverse; the plan order still wins.
        let selection = FeatureSelection::from_features(
            Framework::Hono,
            [
                Feature::Testing(TestingFeature::Vitest),
                Feature::Database(DatabaseFeature::Postgres),
            ],
        );
        assert_eq!(
            in_use(&selection),
            [
                Category::Base,
                Category::Database,
                Category::Testing,
                Category::EnvFile
            ]
        );
    }

    #[test]
    fn in_use_matches_intersection_for_every_category() {
        for feature in Feature::ALL {
            let selection = FeatureSelection::new(Framework::Hono).with_feature(*feature);
            for entry in build_plan(&selection).entries() {
                let expected = entry.category.is_unconditional() || entry.category == feature.category();
                assert_eq!(entry.in_use, expected, "{feature} / {}", entry.category);
            }
        }
    }
}
