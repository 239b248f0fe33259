//! Infrastructure adapters for Hatch.
//!
//! This crate implements the ports defined in `hatch-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_templates;
pub mod filesystem;
pub mod hooks;
pub mod namespace;
pub mod renderer;
pub mod umbrella;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use hooks::{GitHookInstaller, HookOutcome, HookRequest, Repository};
pub use namespace::ReservedNamespaces;
pub use renderer::SimpleRenderer;
pub use umbrella::MixUmbrellaProbe;
