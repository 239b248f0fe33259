//! One module per subcommand. Handlers translate parsed arguments into calls
//! on `hatch-core` / `hatch-adapters` and render the result; no business
//! logic lives here.

pub mod completions;
pub mod config;
pub mod hook;
pub mod init;
pub mod new;
pub mod prompt;
