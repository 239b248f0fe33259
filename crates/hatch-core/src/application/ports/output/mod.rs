//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `hatch-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{RenderContext, TemplateId};
use crate::error::HatchResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `hatch_adapters::filesystem::LocalFilesystem` (production)
/// - `hatch_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> HatchResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> HatchResult<()>;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `hatch_adapters::renderer::SimpleRenderer` (builtin bodies + core engine)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the body registered for `template` against `context`.
    fn render(&self, template: TemplateId, context: &RenderContext) -> HatchResult<String>;
}

/// Port answering whether a fully-qualified module name is already bound.
///
/// Implemented by:
/// - `hatch_adapters::namespace::ReservedNamespaces` (standard library set)
#[cfg_attr(test, mockall::automock)]
pub trait NamespaceLookup: Send + Sync {
    fn is_taken(&self, qualified_name: &str) -> HatchResult<bool>;
}

/// Port detecting whether a project root sits inside an umbrella's `apps/`.
///
/// Errors are allowed; the orchestrator treats them as "not nested".
///
/// Implemented by:
/// - `hatch_adapters::umbrella::MixUmbrellaProbe`
#[cfg_attr(test, mockall::automock)]
pub trait UmbrellaProbe: Send + Sync {
    fn is_nested_in_umbrella(&self, project_root: &Path) -> HatchResult<bool>;
}

/// Yes/no capability asked before writing into an existing directory.
#[cfg_attr(test, mockall::automock)]
pub trait OverwritePrompt {
    fn confirm(&self, prompt: &str) -> HatchResult<bool>;
}

/// Prompt with a predetermined answer (`--yes`, non-interactive runs).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl OverwritePrompt for FixedAnswer {
    fn confirm(&self, _prompt: &str) -> HatchResult<bool> {
        Ok(self.0)
    }
}
