use crate::application::services::installers::Installer;
use crate::domain::{Category, Contribution, Feature, FeatureSelection, TestingFeature};

pub struct TestingInstaller;

impl Installer for TestingInstaller {
    fn category(&self) -> Category {
        Category::Testing
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::Testing(testing) => Some(contribution(*testing)),
                _ => None,
            })
            .collect()
    }
}

fn contribution(testing: TestingFeature) -> Contribution {
    match testing {
        TestingFeature::Vitest => Contribution::new(Feature::Testing(testing))
            .with_config_files()
            .deps(&["vitest", "@vitest/ui", "supertest"])
            .dev_deps(&["@types/supertest"])
            .scripts(&[("test", "vitest"), ("test:ui", "vitest --ui")]),
    }
}
