pub mod container;
pub mod contribution;
pub mod env_block;
pub mod location;
pub mod manifest;
pub mod next_steps;
pub mod selection;

pub use crate::domain::DomainError;
pub use container::{ComposeFile, ComposeService, NamedVolume};
pub use contribution::{Contribution, CopyMode};
pub use env_block::{EnvBlock, EnvLine};
pub use location::ProjectLocation;
pub use manifest::{Manifest, PackageMap};
pub use next_steps::{NextSteps, RunOutcome};
pub use selection::{FeatureSelection, ScaffoldOptions};
