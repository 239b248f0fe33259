//! Application and module name rules.
//!
//! Validation is split into three independent checks that the orchestrator
//! runs in a fixed order: the cheap pattern checks first, then the namespace
//! lookup, which goes through an injected port.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::application::ports::NamespaceLookup;
use crate::domain::error::DomainError;
use crate::error::HatchResult;

static APP_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9_]*$").expect("app name pattern is valid"));

static MODULE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z0-9_]*(\.[A-Z][A-Za-z0-9_]*)*$")
        .expect("module name pattern is valid")
});

/// Check that `name` is a lowercase snake_case application name.
///
/// `was_inferred` only changes the error message: an inferred name is fixed
/// by passing `--app`, an explicit one by choosing another name.
pub fn validate_app_name(name: &str, was_inferred: bool) -> Result<(), DomainError> {
    if APP_NAME.is_match(name) {
        Ok(())
    } else {
        Err(DomainError::InvalidAppName {
            name: name.to_string(),
            inferred: was_inferred,
        })
    }
}

/// Check that `name` is a dot-separated sequence of capitalized identifiers.
pub fn validate_module_name(name: &str) -> Result<(), DomainError> {
    if MODULE_NAME.is_match(name) {
        Ok(())
    } else {
        Err(DomainError::InvalidModuleName {
            name: name.to_string(),
        })
    }
}

/// Check that no symbol is already bound to the fully-qualified `name`.
pub fn check_module_available(name: &str, lookup: &dyn NamespaceLookup) -> HatchResult<()> {
    if lookup.is_taken(name)? {
        return Err(DomainError::ModuleNameTaken {
            name: name.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Default application name for `path`: its last segment after resolving
/// `.` and `..`.
///
/// Relative paths are resolved against `cwd`. The segment is returned
/// verbatim and may still fail [`validate_app_name`]. A path that resolves to
/// the filesystem root yields an empty string.
pub fn derive_app_name(path: &Path, cwd: &Path) -> String {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    normalize_path(&joined)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Default module name for an application: `hello_world` → `HelloWorld`.
///
/// Only the first character of each `_`-delimited segment changes case; the
/// rest is kept as written.
pub fn derive_module_name(app_name: &str) -> String {
    app_name
        .split('_')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(segment.len());
                    out.push(first.to_ascii_uppercase());
                    out.push_str(chars.as_str());
                    out
                }
                None => String::new(),
            }
        })
        .collect()
}

/// Lexically resolve `.` and `..` without touching the filesystem.
///
/// Leading `..` segments of a relative path are kept; `..` above the root
/// of an absolute path is dropped.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
