//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `hatch-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateRenderer`: Template id + context to text
//!   - `NamespaceLookup`: Module name availability
//!   - `UmbrellaProbe`: Parent umbrella detection
//!   - `OverwritePrompt`: Confirmation before reusing a directory
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{
    FixedAnswer, Filesystem, NamespaceLookup, OverwritePrompt, TemplateRenderer, UmbrellaProbe,
};

#[cfg(test)]
pub use output::{
    MockFilesystem, MockNamespaceLookup, MockOverwritePrompt, MockTemplateRenderer,
    MockUmbrellaProbe,
};
