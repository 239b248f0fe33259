//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "hatch",
    bin_name = "hatch",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Generate Mix projects",
    long_about = "Hatch creates ready-to-build Mix projects: plain libraries, \
                  supervised applications and umbrella layouts.",
    after_help = "EXAMPLES:\n\
        \x20 hatch new hello_world\n\
        \x20 hatch new . --module Foo.Bar --sup\n\
        \x20 hatch new platform --umbrella\n\
        \x20 hatch hook install\n\
        \x20 hatch completions bash > /usr/share/bash-completion/completions/hatch",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Mix project.
    #[command(
        visible_alias = "n",
        about = "Create a new Mix project",
        after_help = "EXAMPLES:\n\
            \x20 hatch new hello_world\n\
            \x20 hatch new ./services/billing --app billing --sup\n\
            \x20 hatch new . --module Foo.Bar\n\
            \x20 hatch new platform --umbrella"
    )]
    New(NewArgs),

    /// Install a git hook.
    #[command(about = "Manage git hooks", subcommand)]
    Hook(HookCommands),

    /// Initialise a Hatch configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 hatch init           # default location\n\
            \x20 hatch init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 hatch completions bash > ~/.local/share/bash-completion/completions/hatch\n\
            \x20 hatch completions zsh  > ~/.zfunc/_hatch\n\
            \x20 hatch completions fish > ~/.config/fish/completions/hatch.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Hatch configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 hatch config get toolchain.version\n\
            \x20 hatch config list\n\
            \x20 hatch config path"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `hatch new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Where to create the project. `.` generates into the current directory.
    #[arg(value_name = "PATH", help = "Project directory")]
    pub path: PathBuf,

    /// Application name; defaults to the last segment of PATH.
    #[arg(long = "app", value_name = "APP", help = "Application name (snake_case)")]
    pub app: Option<String>,

    /// Main module name; defaults to the camelized application name.
    #[arg(long = "module", value_name = "MODULE", help = "Module name (e.g. Foo.Bar)")]
    pub module: Option<String>,

    /// Generate an OTP application skeleton with a supervision tree.
    #[arg(long = "sup", help = "Generate a supervised application")]
    pub sup: bool,

    /// Generate an umbrella project.
    #[arg(long = "umbrella", help = "Generate an umbrella project")]
    pub umbrella: bool,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Write into an existing directory without asking"
    )]
    pub yes: bool,
}

// ── hook ──────────────────────────────────────────────────────────────────────

/// Subcommands for `hatch hook`.
#[derive(Debug, Subcommand)]
pub enum HookCommands {
    /// Symlink a script into `.git/hooks`.
    #[command(after_help = "EXAMPLES:\n\
        \x20 hatch hook install\n\
        \x20 hatch hook install --script tools/check.sh --name pre-push")]
    Install(HookInstallArgs),
}

/// Arguments for `hatch hook install`.
#[derive(Debug, Args)]
pub struct HookInstallArgs {
    /// Directory inside the repository (default: current directory).
    #[arg(long = "repo", value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Script to link (default: scripts/pre-commit in the repository root).
    #[arg(long = "script", value_name = "FILE")]
    pub script: Option<PathBuf>,

    /// Hook name under `.git/hooks`.
    #[arg(long = "name", value_name = "HOOK", default_value = "pre-commit")]
    pub name: String,

    /// Replace a different hook already installed under that name.
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `hatch init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `hatch completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `hatch config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `toolchain.version`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
