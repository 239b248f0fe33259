//! Application layer for Hatch.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, Materializer)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. Naming and layout rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateService, GenerationResult, Materializer};

// Re-export port traits (for adapter implementation)
pub use ports::{
    FixedAnswer, Filesystem, NamespaceLookup, OverwritePrompt, TemplateRenderer, UmbrellaProbe,
};

pub use error::ApplicationError;
