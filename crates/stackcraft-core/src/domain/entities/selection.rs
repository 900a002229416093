//! The user's choices, fixed before anything is written.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Category, Feature, Framework};

/// Chosen framework plus the set of selected features.
///
/// Features are de-duplicated and keep the order they were first given in;
/// that order is the order installers handle them within a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSelection {
    framework: Framework,
    features: Vec<Feature>,
}

impl FeatureSelection {
    pub fn new(framework: Framework) -> Self {
        Self {
            framework,
            features: Vec::new(),
        }
    }

    pub fn from_features(framework: Framework, features: impl IntoIterator<Item = Feature>) -> Self {
        features
            .into_iter()
            .fold(Self::new(framework), Self::with_feature)
    }

    #[must_use]
    pub fn with_feature(mut self, feature: Feature) -> Self {
        if !self.features.contains(&feature) {
            self.features.push(feature);
        }
        self
    }

    pub fn framework(&self) -> Framework {
        self.framework
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn contains(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// True when at least one of `governed` was selected.
    pub fn intersects(&self, governed: &[Feature]) -> bool {
        self.features.iter().any(|f| governed.contains(f))
    }

    /// Selected features handled by `category`, in selection order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = Feature> + '_ {
        self.features
            .iter()
            .copied()
            .filter(move |f| f.category() == category)
    }
}

/// Switches for the steps around the installer plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldOptions {
    /// Run the package manager once files are in place.
    pub install: bool,

    /// Initialise a git repository with an initial commit.
    pub git: bool,

    /// Emit compose services for selected database engines.
    pub dockerize_databases: bool,

    /// Emit an `app` compose service and a Dockerfile.
    pub dockerize_app: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            install: true,
            git: true,
            dockerize_databases: true,
            dockerize_app: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{AuthFeature, DatabaseFeature, TestingFeature};

    const PG: Feature = Feature::Database(DatabaseFeature::Postgres);
    const REDIS: Feature = Feature::Database(DatabaseFeature::Redis);
    const JWT: Feature = Feature::Auth(AuthFeature::Jwt);

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let selection = FeatureSelection::from_features(Framework::Hono, [REDIS, PG, REDIS]);
        assert_eq!(selection.features(), [REDIS, PG]);
    }

    #[test]
    fn in_category_filters_and_keeps_order() {
        let selection = FeatureSelection::from_features(Framework::Hono, [REDIS, JWT, PG]);
        assert_eq!(
            selection.in_category(Category::Database).collect::<Vec<_>>(),
            [REDIS, PG]
        );
        assert_eq!(selection.in_category(Category::Ai).count(), 0);
    }

    #[test]
    fn intersects_checks_any_overlap() {
        let selection = FeatureSelection::new(Framework::Express).with_feature(JWT);
        assert!(selection.intersects(&[PG, JWT]));
        assert!(!selection.intersects(&[PG, Feature::Testing(TestingFeature::Vitest)]));
    }
}
