//! Output management and formatting.
//!
//! Commands never call `println!` directly; everything goes through
//! [`OutputManager`] so `--quiet`, `--no-color` and `--output-format json`
//! are honoured in one place.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // Flag first, then `output.format`; Auto resolves to Human on a TTY
        // and Plain when piped.
        let requested = match args.output_format {
            OutputFormat::Auto => config.output.format,
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            explicit => explicit,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}")
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}")
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}")
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// One `* creating <path>` line per generated entry.
    pub fn creating(&self, path: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("* creating {path}")
        } else {
            format!("{} {path}", "* creating".green())
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON document on stdout. Printed even in quiet mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) -> crate::error::CliResult<()> {
        let text = serde_json::to_string_pretty(value)?;
        self.term.write_line(&text)?;
        Ok(())
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(quiet: bool, no_color: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format,
        }
    }

    fn make_manager(quiet: bool, no_color: bool) -> OutputManager {
        // Plain avoids TTY detection in tests.
        OutputManager::new(&args(quiet, no_color, OutputFormat::Plain), &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true);
        assert!(out.print("hello").is_ok());
        assert!(out.creating("mix.exs").is_ok());
    }

    #[test]
    fn no_color_from_flag_or_config() {
        assert!(!make_manager(false, false).no_color);
        assert!(make_manager(false, true).no_color);

        let mut config = AppConfig::default();
        config.output.no_color = true;
        let out = OutputManager::new(&args(false, false, OutputFormat::Plain), &config);
        assert!(out.no_color);
    }

    #[test]
    fn auto_flag_falls_back_to_config_format() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        let out = OutputManager::new(&args(false, true, OutputFormat::Auto), &config);
        assert!(out.is_json());
    }

    #[test]
    fn explicit_flag_beats_config_format() {
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        let out = OutputManager::new(&args(false, true, OutputFormat::Human), &config);
        assert_eq!(out.resolved_format, OutputFormat::Human);
    }
}
