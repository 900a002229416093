use crate::application::services::installers::Installer;
use crate::domain::{
    Category, Contribution, EnvBlock, Feature, FeatureSelection, ObservabilityFeature,
};

pub struct ObservabilityInstaller;

impl Installer for ObservabilityInstaller {
    fn category(&self) -> Category {
        Category::Observability
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::Observability(tool) => Some(contribution(*tool)),
                _ => None,
            })
            .collect()
    }
}

fn contribution(tool: ObservabilityFeature) -> Contribution {
    let base = Contribution::new(Feature::Observability(tool)).with_config_files();
    match tool {
        ObservabilityFeature::Sentry => base.deps(&["@sentry/node"]).env(
            EnvBlock::new("Sentry Configuration")
                .var("SENTRY_DSN", "your-sentry-dsn-here")
                .var("SENTRY_ENVIRONMENT", "production"),
        ),
        ObservabilityFeature::Logtail => base.deps(&["@logtail/node"]).env(
            EnvBlock::new("Logtail Configuration")
                .var("LOGTAIL_SOURCE_TOKEN", "your-logtail-source-token-here"),
        ),
    }
}
