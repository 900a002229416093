//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stackcraft-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations on templates and the destination
//!   - `ProcessRunner`: Package manager and git invocations
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CommandOutput, CommandSpec, Filesystem, ProcessRunner};

#[cfg(test)]
pub use output::MockProcessRunner;
