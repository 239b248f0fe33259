//! Git pre-commit hook installation.
//!
//! The hook is a symlink from `.git/hooks/<name>` to a script kept in the
//! repository, so edits to the script take effect without reinstalling.
//!
//! Worktrees and submodules carry a `.git` file (`gitdir: <path>`) instead of
//! a directory; hooks then go to the shared `hooks` directory git itself reads.

use std::path::{Path, PathBuf};

use hatch_core::{application::ApplicationError, error::HatchResult};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::filesystem::map_io_error;

/// Script linked when no `--script` is given, relative to the repository root.
pub const DEFAULT_SCRIPT: &str = "scripts/pre-commit";

/// Hook name used when none is given.
pub const DEFAULT_HOOK: &str = "pre-commit";

/// What to install and where to start looking for the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookRequest {
    pub start: PathBuf,
    pub script: Option<PathBuf>,
    pub hook_name: String,
    pub force: bool,
}

impl HookRequest {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
            script: None,
            hook_name: DEFAULT_HOOK.to_string(),
            force: false,
        }
    }

    pub fn script(mut self, script: impl Into<PathBuf>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn hook_name(mut self, name: impl Into<String>) -> Self {
        self.hook_name = name.into();
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum HookOutcome {
    Installed { link: PathBuf, target: PathBuf },
    Replaced { link: PathBuf, target: PathBuf },
    AlreadyInstalled { link: PathBuf, target: PathBuf },
}

impl HookOutcome {
    pub fn link(&self) -> &Path {
        match self {
            Self::Installed { link, .. }
            | Self::Replaced { link, .. }
            | Self::AlreadyInstalled { link, .. } => link,
        }
    }
}

/// Installs hooks by symlinking into `.git/hooks`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitHookInstaller;

impl GitHookInstaller {
    pub fn new() -> Self {
        Self
    }

    #[instrument(skip(self), fields(start = %request.start.display(), hook = %request.hook_name))]
    pub fn install(&self, request: &HookRequest) -> HatchResult<HookOutcome> {
        let repo = Repository::discover(&request.start)?;
        let script = request
            .script
            .clone()
            .unwrap_or_else(|| repo.work_tree.join(DEFAULT_SCRIPT));

        if !script.is_file() {
            return Err(ApplicationError::HookScriptMissing { path: script }.into());
        }
        let target = script
            .canonicalize()
            .map_err(|e| map_io_error(&script, e, "resolve hook script"))?;
        warn_if_not_executable(&target);

        let hooks_dir = repo.hooks_dir();
        std::fs::create_dir_all(&hooks_dir)
            .map_err(|e| map_io_error(&hooks_dir, e, "create hooks directory"))?;
        let link = hooks_dir.join(&request.hook_name);

        let replacing = match std::fs::symlink_metadata(&link) {
            Ok(_) if points_to(&link, &target) => {
                debug!(link = %link.display(), "hook already linked");
                return Ok(HookOutcome::AlreadyInstalled { link, target });
            }
            Ok(_) if !request.force => {
                return Err(ApplicationError::HookConflict { path: link }.into());
            }
            Ok(_) => {
                std::fs::remove_file(&link)
                    .map_err(|e| map_io_error(&link, e, "remove existing hook"))?;
                true
            }
            Err(_) => false,
        };

        symlink(&target, &link).map_err(|e| map_io_error(&link, e, "create symlink"))?;
        info!(link = %link.display(), target = %target.display(), "hook installed");

        Ok(if replacing {
            HookOutcome::Replaced { link, target }
        } else {
            HookOutcome::Installed { link, target }
        })
    }
}

/// A located repository: its working tree and the directory git keeps its
/// metadata in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub work_tree: PathBuf,
    pub git_dir: PathBuf,
}

impl Repository {
    /// Walk up from `start` to the first directory holding `.git`.
    ///
    /// A `.git` file is followed through its `gitdir:` line. One that cannot
    /// be read or parsed is skipped with a warning and the walk continues.
    pub fn discover(start: &Path) -> HatchResult<Self> {
        let start_abs = start
            .canonicalize()
            .map_err(|e| map_io_error(start, e, "resolve repository path"))?;

        start_abs
            .ancestors()
            .find_map(|dir| {
                let dot_git = dir.join(".git");
                let git_dir = if dot_git.is_dir() {
                    dot_git
                } else if dot_git.is_file() {
                    read_gitdir_file(&dot_git)?
                } else {
                    return None;
                };
                Some(Self {
                    work_tree: dir.to_path_buf(),
                    git_dir,
                })
            })
            .ok_or_else(|| {
                ApplicationError::NotARepository {
                    path: start.to_path_buf(),
                }
                .into()
            })
    }

    /// Where git looks for hooks. Linked worktrees share the hooks of the
    /// main repository, named by the `commondir` file in their git dir.
    pub fn hooks_dir(&self) -> PathBuf {
        let common = std::fs::read_to_string(self.git_dir.join("commondir"))
            .ok()
            .map(|raw| self.git_dir.join(raw.trim()))
            .unwrap_or_else(|| self.git_dir.clone());
        common.join("hooks")
    }
}

/// Resolve a `gitdir: <path>` file; relative paths are relative to the file.
fn read_gitdir_file(dot_git: &Path) -> Option<PathBuf> {
    let raw = match std::fs::read_to_string(dot_git) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(path = %dot_git.display(), error = %e, "unreadable .git file; skipping");
            return None;
        }
    };
    let Some(target) = raw
        .lines()
        .find_map(|line| line.strip_prefix("gitdir:"))
        .map(str::trim)
        .filter(|t| !t.is_empty())
    else {
        warn!(path = %dot_git.display(), "no gitdir line in .git file; skipping");
        return None;
    };

    let base = dot_git.parent().unwrap_or(Path::new(""));
    let git_dir = base.join(target);
    debug!(git_dir = %git_dir.display(), "following .git file");
    Some(git_dir)
}

fn points_to(link: &Path, target: &Path) -> bool {
    let Ok(current) = std::fs::read_link(link) else {
        return false;
    };
    let current = match link.parent() {
        Some(dir) if current.is_relative() => dir.join(current),
        _ => current,
    };
    current
        .canonicalize()
        .map(|resolved| resolved == target)
        .unwrap_or(false)
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

#[cfg(unix)]
fn warn_if_not_executable(script: &Path) {
    use std::os::unix::fs::PermissionsExt;
    if let Ok(meta) = std::fs::metadata(script) {
        if meta.permissions().mode() & 0o111 == 0 {
            warn!(script = %script.display(), "hook script is not executable; git will skip it");
        }
    }
}

#[cfg(not(unix))]
fn warn_if_not_executable(_script: &Path) {}
