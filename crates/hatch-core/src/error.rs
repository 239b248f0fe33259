//! Unified error handling for Hatch Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Hatch Core operations.
///
/// This enum wraps all possible errors that can occur when using hatch-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HatchError {
    /// Errors from the domain layer (name and template rule violations).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl HatchError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in Hatch".into(),
                "Re-run with -vv and include the log when reporting it".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type HatchResult<T> = Result<T, HatchError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_display_without_prefix() {
        let err: HatchError = DomainError::ModuleNameTaken { name: "Enum".into() }.into();
        assert_eq!(
            err.to_string(),
            "Module name Enum is already taken, please choose another name"
        );
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn application_category_passes_through() {
        let err: HatchError = ApplicationError::NotARepository {
            path: PathBuf::from("/tmp"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn internal_errors_ask_for_a_report() {
        let err = HatchError::Internal {
            message: "create action without content".into(),
        };
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.to_string().contains("This is a bug"));
    }
}
