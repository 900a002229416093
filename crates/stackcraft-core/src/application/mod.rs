//! Application layer for Stackcraft.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService) and the engine it
//!   drives (manifest merger, template copier, installers, plan runner)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Business rules about features and documents live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ScaffoldReport, ScaffoldRequest, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandOutput, CommandSpec, Filesystem, ProcessRunner};

pub use error::ApplicationError;
