use crate::app::{FormInput, submit_warning};
use crate::error::PlacebookError;
use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use super::utils::resolve_text;

/// Parameters for add operation
pub struct AddParams {
    pub name: String,
    pub country: Option<String>,
    pub visit: Option<String>,
    pub landmarks: Option<String>,
    pub notes: Option<String>,
    pub json: bool,
}

pub fn handle_add(ctx: &CommandContext, params: AddParams) -> Result<()> {
    let mut input = FormInput {
        name: params.name,
        country: params.country.unwrap_or_default(),
        visit: params.visit.unwrap_or_default(),
        landmarks: resolve_text(params.landmarks)?.unwrap_or_default(),
        notes: resolve_text(params.notes)?.unwrap_or_default(),
    };

    let mut state = ctx.controller.load_state();
    let submitted = match ctx.controller.submit(&mut state, &mut input) {
        Ok(s) => s,
        Err(e @ PlacebookError::Validation(_)) => anyhow::bail!(submit_warning(&e)),
        Err(e) => return Err(e.into()),
    };

    if !submitted.saved {
        let store = ctx.controller.store();
        anyhow::bail!(
            "Failed to save places under key {} in {}",
            store.key(),
            store.blobs().dir().display()
        );
    }

    let place = state
        .get(&submitted.id)
        .ok_or_else(|| PlacebookError::NotFound(submitted.id.clone()))?;

    if params.json {
        println!("{}", serde_json::to_string_pretty(place)?);
    } else {
        println!(
            "{} {} {}",
            "Added".green(),
            place.id().cyan(),
            place.display_name()
        );
    }
    Ok(())
}
