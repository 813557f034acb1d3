use crate::error::PlacebookError;
use anyhow::Result;

use super::CommandContext;

pub fn handle_show(ctx: &CommandContext, id: Option<String>, json: bool) -> Result<()> {
    let mut state = ctx.controller.load_state();

    if let Some(ref id) = id {
        if !state.select(id) {
            return Err(PlacebookError::NotFound(id.clone()).into());
        }
    }

    if json {
        let place = state
            .selected()
            .ok_or_else(|| PlacebookError::NotFound("no places saved".to_string()))?;
        println!("{}", serde_json::to_string_pretty(place)?);
    } else {
        println!("{}", state.detail_view(ctx.date_format()));
    }
    Ok(())
}
