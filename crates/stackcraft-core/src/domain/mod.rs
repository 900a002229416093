// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stackcraft.
//!
//! Pure logic with no I/O. Everything that touches the filesystem or spawns
//! a process goes through ports defined in the application layer.
//!
//! ## What lives here
//!
//! - **Catalog**: frameworks, categories and the closed feature set
//! - **Registry**: pinned versions for every package an installer may add
//! - **Documents**: the manifest model, env blocks, compose model
//! - **Inputs**: feature selection, project location, scaffold options
//!
// Public API - what the world sees
pub mod catalog;
pub mod entities;
pub mod error;
pub mod registry;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{
    ComposeFile, ComposeService, Contribution, CopyMode, EnvBlock, EnvLine, FeatureSelection,
    Manifest, NamedVolume, NextSteps, PackageMap, ProjectLocation, RunOutcome, ScaffoldOptions,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    AiFeature, AuthFeature, Category, CloudFeature, DatabaseFeature, DocsFeature, EmailFeature,
    Feature, Framework, ObservabilityFeature, QueueFeature, RateLimitFeature, RealtimeFeature,
    TestingFeature, ValidationFeature,
};

pub use validation::DomainValidator;
