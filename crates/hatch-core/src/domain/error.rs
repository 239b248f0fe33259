// ============================================================================
// domain/error.rs - NAME AND TEMPLATE RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried into summaries and test assertions)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("{}", invalid_app_name_message(name, *inferred))]
    InvalidAppName { name: String, inferred: bool },

    #[error(
        "Module name must be a valid Elixir alias (for example: Foo.Bar), got: \"{name}\""
    )]
    InvalidModuleName { name: String },

    #[error("Module name {name} is already taken, please choose another name")]
    ModuleNameTaken { name: String },

    // ========================================================================
    // Template Contract Violations
    // ========================================================================
    #[error("template references undefined variable '{name}'")]
    MissingVariable { name: String },

    #[error("malformed template: {reason}")]
    MalformedTemplate { reason: String },

    #[error("invalid file plan: {reason}")]
    InvalidPlan { reason: String },
}

fn invalid_app_name_message(name: &str, inferred: bool) -> String {
    let base = format!(
        "Application name must start with a lowercase ASCII letter, followed by \
         lowercase ASCII letters, numbers, or underscores, got: \"{name}\""
    );
    if inferred {
        format!(
            "{base}. The application name is inferred from the path, if you'd like to \
             explicitly name the application then use the \"--app APP\" option"
        )
    } else {
        base
    }
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidAppName { inferred: true, .. } => vec![
                "Pass an explicit name: hatch new <PATH> --app my_app".into(),
                "Or choose a path whose last segment is lowercase snake_case".into(),
            ],
            Self::InvalidAppName { inferred: false, .. } => vec![
                "Use lowercase letters, digits and underscores, starting with a letter".into(),
                "Examples: my_app, billing, api2".into(),
            ],
            Self::InvalidModuleName { .. } => vec![
                "Each dot-separated segment must start with an uppercase letter".into(),
                "Examples: MyApp, Billing.Api, Foo.Bar2".into(),
            ],
            Self::ModuleNameTaken { name } => vec![
                format!("'{name}' clashes with a module that already exists"),
                "Pick another name with --module, e.g. --module MyCompany.Enum".into(),
            ],
            Self::MissingVariable { .. }
            | Self::MalformedTemplate { .. }
            | Self::InvalidPlan { .. } => vec![
                "The built-in templates and planner disagree; this is a bug".into(),
                "Please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidAppName { .. }
            | Self::InvalidModuleName { .. }
            | Self::ModuleNameTaken { .. } => ErrorCategory::Validation,
            Self::MissingVariable { .. }
            | Self::MalformedTemplate { .. }
            | Self::InvalidPlan { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
