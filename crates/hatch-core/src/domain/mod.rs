// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for hatch.
//!
//! This module contains the naming rules, the template engine and the tree
//! planner. Anything that needs the outside world (a symbol table, the
//! filesystem, the template bodies) is reached through the ports defined in
//! the application layer.
//!
//! ## Boundaries
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: specs, contexts and plans are built once and read
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod names;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    common::RelativePath,
    file_plan::{ActionKind, FileAction, FilePlan},
    project_spec::{NewOptions, ProjectSpec},
    template::{ContextValue, RenderContext},
};

pub use error::{DomainError, ErrorCategory};

pub use names::{
    check_module_available, derive_app_name, derive_module_name, normalize_path, validate_app_name,
    validate_module_name,
};

pub use value_objects::{ProjectShape, TemplateId, ToolVersion};
