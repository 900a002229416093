//! Stackcraft Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers for the Stackcraft backend scaffolder,
//! following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stackcraft-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService → plan → installers)  │
//! │   ManifestMerger · TemplateCopier       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Process)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stackcraft-adapters (Infrastructure) │
//! │ (LocalFilesystem, MemoryFilesystem, ...)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Feature catalog, Manifest, Compose)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stackcraft_core::prelude::*;
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn ProcessRunner>) { unimplemented!() }
//!
//! let (filesystem, process) = adapters();
//! let service = ScaffoldService::new(filesystem, process, "./templates");
//!
//! let cwd = std::env::current_dir().unwrap();
//! let request = ScaffoldRequest {
//!     location: ProjectLocation::resolve("my-api", &cwd, None).unwrap(),
//!     selection: FeatureSelection::new(Framework::Hono)
//!         .with_feature("postgres".parse().unwrap()),
//!     options: ScaffoldOptions::default(),
//! };
//! let report = service.scaffold(&request).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldReport, ScaffoldRequest, ScaffoldService,
        ports::{CommandOutput, CommandSpec, Filesystem, ProcessRunner},
    };
    pub use crate::domain::{
        Category, Feature, FeatureSelection, Framework, ProjectLocation, ScaffoldOptions,
    };
    pub use crate::error::{StackResult, StackcraftError};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
