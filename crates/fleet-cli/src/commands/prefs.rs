use tracing::info;

use crate::app::AppContext;
use crate::cli::{PrefsArgs, PrefsSubcommand};
use crate::output::print_json;
use crate::preferences::Preferences;
use crate::ui::{header, kv, print};

pub fn handle_prefs(ctx: &AppContext, args: &PrefsArgs) -> anyhow::Result<()> {
    match args.command {
        PrefsSubcommand::Show { json } => handle_show(ctx, json),
        PrefsSubcommand::Set { ref key, ref value } => handle_set(ctx, key, value),
    }
}

fn handle_show(ctx: &AppContext, json: bool) -> anyhow::Result<()> {
    let preferences = ctx.preferences()?;
    let ui = ctx.ui_context(json, None);
    if ui.mode.is_json() {
        return print_json(preferences);
    }
    if ui.mode.is_pretty() && !ctx.quiet() {
        print(&ui, &header(&ui, "prefs", None));
    }
    for (key, value) in preferences.entries() {
        print(&ui, &kv(&ui, key, &value));
    }
    Ok(())
}

fn handle_set(ctx: &AppContext, key: &str, value: &str) -> anyhow::Result<()> {
    let path = ctx.preferences_path()?;
    let mut preferences = Preferences::load(&path);
    preferences.set(key, value)?;
    preferences.save(&path)?;
    info!(key, value, path = %path.display(), "preference saved");

    if !ctx.quiet() {
        let ui = ctx.ui_context(false, None);
        print(&ui, &kv(&ui, key, value.trim()));
    }
    Ok(())
}
