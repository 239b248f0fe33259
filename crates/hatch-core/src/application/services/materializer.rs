//! Materializer - writes a rendered [`FilePlan`] to disk.
//!
//! Writes happen strictly in plan order. On the first failure the run stops
//! and the error lists what was already created; nothing is rolled back.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, OverwritePrompt},
    },
    domain::{ActionKind, FilePlan, ProjectShape, ProjectSpec, RelativePath},
    error::{HatchError, HatchResult},
};

/// Outcome of a successful generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    pub root: PathBuf,
    pub shape: ProjectShape,
    pub files_created: Vec<RelativePath>,
    pub warnings: Vec<String>,
    pub next_steps: Vec<String>,
}

impl GenerationResult {
    fn new(root: PathBuf, shape: ProjectShape, files_created: Vec<RelativePath>) -> Self {
        Self {
            root,
            shape,
            files_created,
            warnings: Vec::new(),
            next_steps: Vec::new(),
        }
    }

    pub(crate) fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub(crate) fn with_next_steps(mut self, next_steps: Vec<String>) -> Self {
        self.next_steps = next_steps;
        self
    }

    /// Closing message shown after the file listing.
    pub fn summary(&self) -> String {
        let steps: String = self
            .next_steps
            .iter()
            .map(|step| format!("    {step}\n"))
            .collect();

        match self.shape {
            ProjectShape::Umbrella => format!(
                "Your umbrella project was created successfully.\n\
                 Inside your project, you will find an apps/ directory\n\
                 where you can create and host many apps:\n\n\
                 {steps}\n\
                 Commands like \"mix compile\" and \"mix test\" when executed\n\
                 in the umbrella project root will automatically run\n\
                 for each application in the apps/ directory.\n"
            ),
            ProjectShape::Standalone | ProjectShape::Nested => format!(
                "Your Mix project was created successfully.\n\
                 You can use \"mix\" to compile it, test it, and more:\n\n\
                 {steps}\n\
                 Run \"mix help\" for more commands.\n"
            ),
        }
    }
}

/// Applies plans through the [`Filesystem`] port.
pub struct Materializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> Materializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Write `plan` under `root`, the resolved location of `spec.path()`.
    ///
    /// When `root` is an existing directory and `spec` does not target the
    /// working directory, `prompt` is asked first; a refusal returns
    /// [`ApplicationError::DirectoryConflict`] before anything is written.
    /// The question and the conflict name the path as the user typed it.
    /// Existing files inside the root are overwritten without asking.
    #[instrument(skip_all, fields(root = %root.display(), shape = %plan.shape()))]
    pub fn materialize(
        &self,
        root: &Path,
        spec: &ProjectSpec,
        plan: &FilePlan,
        prompt: &dyn OverwritePrompt,
    ) -> HatchResult<GenerationResult> {
        plan.validate()?;

        if !spec.targets_current_dir() && self.filesystem.is_dir(root) {
            let question = format!(
                "The directory {} already exists. Are you sure you want to continue?",
                spec.path().display()
            );
            if !prompt.confirm(&question)? {
                info!("user declined to reuse existing directory");
                return Err(ApplicationError::DirectoryConflict {
                    path: spec.path().to_path_buf(),
                }
                .into());
            }
        }

        let mut created: Vec<RelativePath> = Vec::with_capacity(plan.file_count());

        self.filesystem
            .create_dir_all(root)
            .map_err(|e| write_failure(root, e, &created))?;

        for action in plan.actions() {
            let path = root.join(action.relative_path());
            match action.kind() {
                ActionKind::CreateDir => {
                    self.filesystem
                        .create_dir_all(&path)
                        .map_err(|e| write_failure(&path, e, &created))?;
                    debug!(path = %action.relative_path(), "created directory");
                }
                ActionKind::CreateFile => {
                    let content = action.rendered_content().ok_or_else(|| HatchError::Internal {
                        message: format!("{} was planned without content", action.relative_path()),
                    })?;
                    self.filesystem
                        .write_file(&path, content)
                        .map_err(|e| write_failure(&path, e, &created))?;
                    debug!(path = %action.relative_path(), bytes = content.len(), "created file");
                    created.push(action.relative_path().clone());
                }
            }
        }

        info!(files = created.len(), "plan materialized");
        Ok(GenerationResult::new(root.to_path_buf(), plan.shape(), created))
    }
}

fn write_failure(path: &Path, cause: HatchError, created: &[RelativePath]) -> HatchError {
    warn!(path = %path.display(), error = %cause, created = created.len(), "write failed");
    let reason = match cause {
        HatchError::Application(ApplicationError::FilesystemError { reason, .. }) => reason,
        other => other.to_string(),
    };
    ApplicationError::WriteFailure {
        path: path.to_path_buf(),
        reason,
        created: created.iter().map(ToString::to_string).collect(),
    }
    .into()
}
