use crate::application::services::installers::Installer;
use crate::domain::{Category, Contribution, EnvBlock, Feature, FeatureSelection, QueueFeature};

pub struct QueueInstaller;

impl Installer for QueueInstaller {
    fn category(&self) -> Category {
        Category::Queue
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::Queue(queue) => Some(contribution(*queue)),
                _ => None,
            })
            .collect()
    }
}

fn contribution(queue: QueueFeature) -> Contribution {
    let base = Contribution::new(Feature::Queue(queue)).with_config_files();
    match queue {
        QueueFeature::BullMq => base.deps(&["bullmq"]).env(
            EnvBlock::new("BullMQ Configuration")
                .var("REDIS_HOST", "localhost")
                .var("REDIS_PORT", "6379")
                .var("REDIS_PASSWORD", ""),
        ),
        QueueFeature::Inngest => base.deps(&["inngest"]).env(
            EnvBlock::new("Inngest Configuration")
                .var("INNGEST_EVENT_KEY", "your-inngest-event-key")
                .var("INNGEST_SIGNING_KEY", "your-inngest-signing-key"),
        ),
    }
}
