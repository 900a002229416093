//! What one feature adds to a project.

use crate::domain::entities::env_block::EnvBlock;
use crate::domain::entities::manifest::PackageMap;
use crate::domain::registry;
use crate::domain::value_objects::Feature;

/// Which parts of a feature's template directory are copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMode {
    /// Only the `src/` subtree.
    Source,
    /// The `src/` subtree plus loose root-level `*.ts` / `*.json` files.
    SourceAndConfig,
}

/// The full set of changes a feature makes, applied in field order:
/// copy, dependencies, env block, scripts, ignore entries, directories.
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub feature: Feature,
    pub copy_mode: CopyMode,
    pub dependencies: &'static [&'static str],
    pub dev_dependencies: &'static [&'static str],
    pub env: Option<EnvBlock>,
    pub scripts: &'static [(&'static str, &'static str)],
    pub gitignore: &'static [&'static str],
    pub directories: &'static [&'static str],
}

impl Contribution {
    /// A contribution that only copies the feature's `src/` subtree.
    pub fn new(feature: Feature) -> Self {
        Self {
            feature,
            copy_mode: CopyMode::Source,
            dependencies: &[],
            dev_dependencies: &[],
            env: None,
            scripts: &[],
            gitignore: &[],
            directories: &[],
        }
    }

    #[must_use]
    pub fn with_config_files(mut self) -> Self {
        self.copy_mode = CopyMode::SourceAndConfig;
        self
    }

    #[must_use]
    pub fn deps(mut self, names: &'static [&'static str]) -> Self {
        self.dependencies = names;
        self
    }

    #[must_use]
    pub fn dev_deps(mut self, names: &'static [&'static str]) -> Self {
        self.dev_dependencies = names;
        self
    }

    #[must_use]
    pub fn env(mut self, block: EnvBlock) -> Self {
        self.env = Some(block);
        self
    }

    #[must_use]
    pub fn scripts(mut self, scripts: &'static [(&'static str, &'static str)]) -> Self {
        self.scripts = scripts;
        self
    }

    #[must_use]
    pub fn ignore(mut self, entries: &'static [&'static str]) -> Self {
        self.gitignore = entries;
        self
    }

    #[must_use]
    pub fn dirs(mut self, dirs: &'static [&'static str]) -> Self {
        self.directories = dirs;
        self
    }

    /// Template directory relative to the template root,
    /// e.g. `extras/database/postgres`.
    pub fn template_dir(&self) -> String {
        format!(
            "extras/{}/{}",
            self.feature.category().as_str(),
            self.feature.provider()
        )
    }

    /// Runtime dependencies with pinned versions.
    pub fn resolved_dependencies(&self) -> PackageMap {
        resolve(self.dependencies)
    }

    /// Dev dependencies with pinned versions.
    pub fn resolved_dev_dependencies(&self) -> PackageMap {
        resolve(self.dev_dependencies)
    }
}

/// Pin `names` through the dependency registry.
pub fn resolve(names: &[&str]) -> PackageMap {
    names
        .iter()
        .map(|name| (name.to_string(), registry::lookup(name).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{DatabaseFeature, RateLimitFeature};

    #[test]
    fn template_dir_uses_category_and_provider() {
        let c = Contribution::new(Feature::RateLimit(RateLimitFeature::Upstash));
        assert_eq!(c.template_dir(), "extras/ratelimit/upstash");
    }

    #[test]
    fn dependencies_resolve_through_registry() {
        let c = Contribution::new(Feature::Database(DatabaseFeature::Postgres))
            .deps(&["postgres", "drizzle-orm"])
            .dev_deps(&["drizzle-kit"]);
        let deps = c.resolved_dependencies();
        assert_eq!(deps.get("postgres").map(String::as_str), Some("^3.4.4"));
        assert_eq!(
            c.resolved_dev_dependencies().get("drizzle-kit").map(String::as_str),
            Some("^0.20.10")
        );
    }

    #[test]
    fn defaults_copy_source_only() {
        let c = Contribution::new(Feature::Database(DatabaseFeature::Redis));
        assert_eq!(c.copy_mode, CopyMode::Source);
        assert!(c.env.is_none());
    }
}
