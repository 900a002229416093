//! Application services - orchestrate use cases.
//!
//! Leaves first: the manifest merger and template copier are the only code
//! that writes shared project files; installers build on them; the plan
//! runner sequences installers; the scaffold service drives the whole run.

pub mod finalize;
pub mod installers;
pub mod manifest_merger;
pub mod plan;
pub mod scaffold_service;
pub mod template_copier;

pub use installers::{InstallContext, Installer, apply_contribution, installer_for};
pub use manifest_merger::ManifestMerger;
pub use plan::{InstallerDescriptor, InstallerPlan, InstallerRunner, PlannedInstaller, build_plan};
pub use scaffold_service::{ScaffoldReport, ScaffoldRequest, ScaffoldService};
pub use template_copier::{CopyReport, TemplateCopier};
