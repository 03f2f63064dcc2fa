//! Command handlers
//!
//! Every command loads a [`CommandContext`] first; transfer commands then
//! run the timestamp and destination checks before touching storage.

mod check_config;
mod context;
mod project_root;
mod transfer;

use anyhow::Result;
use tracing::debug;

use shipyard::presentation::{Cli, Commands};

pub use context::CommandContext;

/// Run the parsed command line
pub fn dispatch(cli: Cli) -> Result<()> {
    let mut ctx = CommandContext::load(&cli)?;
    crate::ui::logging::init(cli.verbose, ctx.config.output.verbosity);
    debug!(command = cli.command.name(), root = %ctx.root.display(), "dispatching");

    match &cli.command {
        Commands::CheckConfig => check_config::cmd_check_config(&mut ctx),
        Commands::Put => transfer::cmd_put(&mut ctx),
        Commands::Get { local_path } => transfer::cmd_get(&mut ctx, local_path.as_deref()),
        Commands::Ls { all } => transfer::cmd_ls(&mut ctx, *all),
        Commands::Rm => transfer::cmd_rm(&mut ctx),
    }
}
