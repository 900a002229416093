use crate::application::services::installers::Installer;
use crate::domain::{Category, Contribution, Feature, FeatureSelection, RealtimeFeature};

pub struct RealtimeInstaller;

impl Installer for RealtimeInstaller {
    fn category(&self) -> Category {
        Category::Realtime
    }

    fn contributions(&self, selection: &FeatureSelection) -> Vec<Contribution> {
        selection
            .features()
            .iter()
            .filter_map(|feature| match feature {
                Feature::Realtime(realtime) => Some(contribution(*realtime)),
                _ => None,
            })
            .collect()
    }
}

/// Neither transport needs secrets.
fn contribution(realtime: RealtimeFeature) -> Contribution {
    let base = Contribution::new(Feature::Realtime(realtime));
    match realtime {
        RealtimeFeature::SocketIo => base.deps(&["socket.io"]).dev_deps(&["@types/socket.io"]),
        RealtimeFeature::Sse => base,
    }
}
