use crate::application::services::installers::Installer;
use crate::domain::{Category, Contribution, Feature, FeatureSelection, ValidationFeature};

pub struct ValidationInstaller;

impl Installer for ValidationInstaller {
    fn category(&self) -> Category {
        Category::Validation
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::Validation(lib) => Some(contribution(*lib)),
                _ => None,
            })
            .collect()
    }
}

fn contribution(lib: ValidationFeature) -> Contribution {
    let base = Contribution::new(Feature::Validation(lib));
    match lib {
        ValidationFeature::Zod => base.deps(&["zod"]),
        ValidationFeature::Yup => base.deps(&["yup"]),
    }
}
