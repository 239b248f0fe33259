//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::TemplateId;
use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The target directory exists and the user declined to reuse it.
    #[error("Aborted: {} already exists and was left untouched", path.display())]
    DirectoryConflict { path: PathBuf },

    /// A write failed midway; `created` lists what is already on disk.
    #[error("Failed to write {}: {reason}", path.display())]
    WriteFailure {
        path: PathBuf,
        reason: String,
        created: Vec<String>,
    },

    /// Raw filesystem failure reported by an adapter.
    #[error("Filesystem error at {}: {reason}", path.display())]
    FilesystemError { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("Rendering {template} failed: {reason}")]
    RenderingFailed { template: TemplateId, reason: String },

    /// The namespace lookup could not answer.
    #[error("Module lookup failed: {reason}")]
    LookupFailed { reason: String },

    /// Reading the confirmation answer failed.
    #[error("Could not read confirmation: {reason}")]
    PromptFailed { reason: String },

    /// No `.git` directory above the given path.
    #[error("{} is not inside a git repository", path.display())]
    NotARepository { path: PathBuf },

    /// Hook script to link does not exist.
    #[error("Hook script not found: {}", path.display())]
    HookScriptMissing { path: PathBuf },

    /// A different hook already occupies the destination.
    #[error("A different hook is already installed at {}", path.display())]
    HookConflict { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryConflict { path } => vec![
                format!("Choose a path other than {}", path.display()),
                "Or pass --yes to write into the existing directory".into(),
            ],
            Self::WriteFailure { created, .. } if created.is_empty() => vec![
                "Check that you have write permissions".into(),
            ],
            Self::WriteFailure { created, .. } => vec![
                "Check that you have write permissions".into(),
                format!(
                    "{} file(s) were already written and not removed: {}",
                    created.len(),
                    created.join(", ")
                ),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("The built-in '{template}' template could not be rendered"),
                "This is a bug, please report it".into(),
            ],
            Self::LookupFailed { .. } => vec![
                "Pass an explicit, clearly unique name with --module".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Re-run with --yes in non-interactive environments".into(),
            ],
            Self::NotARepository { .. } => vec![
                "Run `git init` first, or point --repo at an existing checkout".into(),
            ],
            Self::HookScriptMissing { path } => vec![
                format!("Create {} or pass --script <PATH>", path.display()),
            ],
            Self::HookConflict { .. } => vec![
                "Inspect the existing hook before replacing it".into(),
                "Use --force to replace it".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryConflict { .. } | Self::HookConflict { .. } => {
                ErrorCategory::Validation
            }
            Self::NotARepository { .. } | Self::HookScriptMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::WriteFailure { .. }
            | Self::FilesystemError { .. }
            | Self::RenderingFailed { .. }
            | Self::LookupFailed { .. }
            | Self::PromptFailed { .. } => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_failure_lists_created_files() {
        let err = ApplicationError::WriteFailure {
            path: PathBuf::from("app/mix.exs"),
            reason: "disk full".into(),
            created: vec!["README.md".into(), ".gitignore".into()],
        };
        let hints = err.suggestions().join("\n");
        assert!(hints.contains("README.md, .gitignore"));
        assert_eq!(err.category(), ErrorCategory::Internal);
    }

    #[test]
    fn conflict_is_a_user_error() {
        let err = ApplicationError::DirectoryConflict {
            path: PathBuf::from("existing"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().contains("existing"));
    }
}
