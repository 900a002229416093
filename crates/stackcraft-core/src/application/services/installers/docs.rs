use crate::application::services::installers::Installer;
use crate::domain::{Category, Contribution, DocsFeature, Feature, FeatureSelection};

pub struct DocsInstaller;

impl Installer for DocsInstaller {
    fn category(&self) -> Category {
        Category::Docs
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::Docs(docs) => Some(contribution(*docs)),
                _ => None,
            })
            .collect()
    }
}

fn contribution(docs: DocsFeature) -> Contribution {
    let base = Contribution::new(Feature::Docs(docs)).with_config_files();
    match docs {
        DocsFeature::Swagger => base.deps(&["@hono/swagger"]),
        DocsFeature::Scalar => base.deps(&["@scalar/hono-api-reference"]),
    }
}
