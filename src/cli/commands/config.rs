use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const SET_USAGE: &str = "usage: config set <currency|locale|api_key|api_base|color> <value>";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change preferences",
        "config [show|set <key> <value>]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|action| action.to_ascii_lowercase()) {
        None => show_config(context),
        Some(action) if action == "show" => show_config(context),
        Some(action) if action == "set" => {
            let (Some(key), Some(_)) = (args.get(1), args.get(2)) else {
                return Err(CommandError::InvalidArguments(SET_USAGE.into()));
            };
            set_config_value(context, key, &args[2..].join(" "))
        }
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown config action `{other}`; {SET_USAGE}"
        ))),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output::section("Configuration");
    let mut rows = context.config.entries();
    if context.config.api_key.is_none() && context.config.effective_api_key().is_some() {
        rows.push(("api_key source", "environment".into()));
    }
    rows.push(("data dir", context.paths.root().display().to_string()));
    output::two_column(&rows);
    Ok(())
}

fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    context.config.set(key, value)?;
    context.persist_config()?;

    match key.to_ascii_lowercase().as_str() {
        "api_key" | "api_base" => context.invalidate_rates(),
        "color" | "ui_color_enabled" => output::set_color_enabled(context.config.ui_color_enabled),
        _ => {}
    }
    tracing::debug!(key, "config updated");
    io::print_success(format!("Updated {}", key.to_ascii_lowercase()));
    Ok(())
}
