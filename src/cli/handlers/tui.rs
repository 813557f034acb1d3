use anyhow::Result;

use super::CommandContext;

pub fn handle_tui(ctx: CommandContext) -> Result<()> {
    let date_format = ctx.config.tui.date_format.clone();
    crate::tui::run_tui(ctx.controller, &date_format)?;
    Ok(())
}
