//! Infrastructure adapters for Stackcraft.
//!
//! This crate implements the ports defined in `stackcraft-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod process;
pub mod template_root;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::SystemProcessRunner;
pub use template_root::{TEMPLATES_DIR_ENV, resolve_template_root};
