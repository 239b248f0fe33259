//! Implementation of the `hatch new` command.
//!
//! Responsibility: wire the adapters into a `GenerateService`, run it, and
//! display the result. No business logic lives here.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use hatch_adapters::{LocalFilesystem, MixUmbrellaProbe, ReservedNamespaces, SimpleRenderer};
use hatch_core::{
    application::{FixedAnswer, GenerateService, GenerationResult, OverwritePrompt},
    domain::NewOptions,
};

use crate::{
    cli::NewArgs,
    commands::prompt::TerminalPrompt,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute the `hatch new` command.
#[instrument(skip_all, fields(path = %args.path.display()))]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let working_dir = std::env::current_dir().with_cli_context(|| "reading current directory")?;
    let service = build_service(&config, working_dir)?;

    let display_root = args.path.clone();
    let prompt: Box<dyn OverwritePrompt> = if args.yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(TerminalPrompt)
    };

    let result = service.generate(options(args), prompt.as_ref())?;
    info!(
        root = %result.root.display(),
        files = result.files_created.len(),
        "project generated"
    );

    report(&result, &display_root, &output)
}

fn options(args: NewArgs) -> NewOptions {
    let mut options = NewOptions::new(args.path)
        .sup(args.sup)
        .umbrella(args.umbrella);
    if let Some(app) = args.app {
        options = options.app(app);
    }
    if let Some(module) = args.module {
        options = options.module(module);
    }
    options
}

fn build_service(config: &AppConfig, working_dir: PathBuf) -> CliResult<GenerateService> {
    let renderer = match &config.templates.dir {
        Some(dir) => SimpleRenderer::with_override_dir(dir),
        None => SimpleRenderer::new(),
    };
    let namespace = ReservedNamespaces::new().with_extra(config.namespace.reserved.iter().cloned());

    Ok(GenerateService::new(
        Box::new(renderer),
        Box::new(LocalFilesystem::new()),
        Box::new(namespace),
        Box::new(MixUmbrellaProbe::new()),
    )
    .with_tool_version(config.tool_version()?)
    .with_working_dir(working_dir))
}

fn report(result: &GenerationResult, display_root: &Path, output: &OutputManager) -> CliResult<()> {
    if output.is_json() {
        return output.json(result);
    }

    for file in &result.files_created {
        output.creating(&display_path(display_root, file.as_path()))?;
    }
    for warning in &result.warnings {
        output.warning(warning)?;
    }
    output.print("")?;
    output.print(&result.summary())?;
    Ok(())
}

/// Path as the user typed it, joined with the file. `.` is left off.
fn display_path(root: &Path, file: &Path) -> String {
    let is_cwd = root
        .components()
        .all(|c| matches!(c, std::path::Component::CurDir));
    if is_cwd {
        file.display().to_string()
    } else {
        root.join(file).display().to_string()
    }
}
