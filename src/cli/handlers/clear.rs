use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::confirm;

pub fn handle_clear(ctx: &CommandContext, force: bool) -> Result<()> {
    let count = ctx.controller.load_state().len();

    if !force && !confirm(&format!("Remove all {} saved places permanently?", count))? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.controller.store().clear()?;
    println!("{} {} places", "Cleared".red(), count);
    Ok(())
}
