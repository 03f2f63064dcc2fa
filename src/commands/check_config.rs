//! Check-config command handler

use anyhow::Result;

use shipyard::presentation::factory::create_transfer_use_case;

use super::CommandContext;

/// Validate every destination, reporting incomplete ones as warnings.
///
/// Unlike the transfer commands, a missing active destination is not an
/// error here.
pub fn cmd_check_config(ctx: &mut CommandContext) -> Result<()> {
    let use_case = create_transfer_use_case(ctx.remote()?, ctx.project_name());
    use_case.check_config(false, &mut ctx.reporter)?;
    Ok(())
}
