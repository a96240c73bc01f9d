//! Theme stylesheet command.

use anyhow::{bail, Result};
use vitrina_data::ConfigState;
use vitrina_ui::Theme;

use super::ThemeArgs;
use crate::context::Context;

/// Run the theme command.
pub async fn run(args: ThemeArgs, ctx: &Context) -> Result<()> {
    let source = ctx.catalog_source(args.snapshot.as_deref())?;

    let mut state = ConfigState::new();
    state.load(source.as_ref()).await;

    if args.debug {
        for line in state.debug_lines(args.mobile) {
            println!("{}", line);
        }
        return Ok(());
    }

    let Some(theme) = Theme::maybe_from(state.config.as_ref()) else {
        bail!("{}", state.error.as_deref().unwrap_or("No site configuration"));
    };

    if ctx.output.is_json() {
        let vars: serde_json::Map<String, serde_json::Value> = theme
            .vars()
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone().into()))
            .collect();
        ctx.output.json(&vars);
    } else {
        print!("{}", theme.stylesheet());
    }

    Ok(())
}
