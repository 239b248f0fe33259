//! Renderer binding template ids to bodies and running the core engine.

use std::path::{Path, PathBuf};

use hatch_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{RenderContext, TemplateId},
    error::HatchResult,
};
use tracing::{debug, instrument, warn};

use crate::builtin_templates;

/// Renders the builtin bodies, optionally shadowed by files in an override
/// directory.
///
/// An override for a template lives at `<dir>/<template-id>.tmpl`, for
/// example `templates/project-manifest.tmpl`. Templates without a file there
/// fall back to the builtin body.
#[derive(Debug, Clone, Default)]
pub struct SimpleRenderer {
    override_dir: Option<PathBuf>,
}

impl SimpleRenderer {
    /// Create a renderer using only the builtin bodies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for per-template overrides in `dir` first.
    pub fn with_override_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            override_dir: Some(dir.into()),
        }
    }

    pub fn override_dir(&self) -> Option<&Path> {
        self.override_dir.as_deref()
    }

    fn source(&self, template: TemplateId) -> HatchResult<String> {
        let Some(dir) = &self.override_dir else {
            return Ok(builtin_templates::body(template).to_string());
        };

        let path = dir.join(format!("{template}.tmpl"));
        if !path.is_file() {
            return Ok(builtin_templates::body(template).to_string());
        }

        debug!(path = %path.display(), "using template override");
        std::fs::read_to_string(&path).map_err(|e| {
            ApplicationError::RenderingFailed {
                template,
                reason: format!("cannot read {}: {e}", path.display()),
            }
            .into()
        })
    }
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip(self, context), fields(template = %template))]
    fn render(&self, template: TemplateId, context: &RenderContext) -> HatchResult<String> {
        let source = self.source(template)?;
        context.render(&source).map_err(|e| {
            warn!(error = %e, "template failed to render");
            e.into()
        })
    }
}
