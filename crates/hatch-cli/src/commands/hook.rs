//! `hatch hook install`: symlink a script into `.git/hooks`.

use tracing::instrument;

use hatch_adapters::{GitHookInstaller, HookOutcome, HookRequest};

use crate::{
    cli::{HookCommands, HookInstallArgs},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(cmd: HookCommands, output: OutputManager) -> CliResult<()> {
    match cmd {
        HookCommands::Install(args) => install(args, &output),
    }
}

#[instrument(skip_all, fields(hook = %args.name))]
fn install(args: HookInstallArgs, output: &OutputManager) -> CliResult<()> {
    let start = match args.repo {
        Some(repo) => repo,
        None => std::env::current_dir().with_cli_context(|| "reading current directory")?,
    };

    let mut request = HookRequest::new(start).hook_name(args.name).force(args.force);
    if let Some(script) = args.script {
        request = request.script(script);
    }

    let outcome = GitHookInstaller::new().install(&request)?;

    if output.is_json() {
        return output.json(&outcome);
    }
    match &outcome {
        HookOutcome::Installed { link, target } => output.success(&format!(
            "Installed {} -> {}",
            link.display(),
            target.display()
        ))?,
        HookOutcome::Replaced { link, target } => output.success(&format!(
            "Replaced {} -> {}",
            link.display(),
            target.display()
        ))?,
        HookOutcome::AlreadyInstalled { link, .. } => {
            output.info(&format!("{} is already installed", link.display()))?
        }
    }
    Ok(())
}
