use anyhow::Result;

use super::CommandContext;
use super::utils::print_list;

pub fn handle_list(ctx: &CommandContext, json: bool) -> Result<()> {
    let state = ctx.controller.load_state();

    if json {
        println!("{}", serde_json::to_string_pretty(&state.newest_first())?);
    } else {
        print_list(&state.list_view());
    }
    Ok(())
}
