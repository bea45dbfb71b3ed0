use std::path::PathBuf;

use ratecard_core::CoreError;
use ratecard_domain::{Calculation, Displayable, Identifiable};
use ratecard_storage_json::write_calculation_export;

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::formatters::{CliFormatters, HISTORY_HEADERS};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

const EMPTY_HISTORY: &str = "No calculations yet.";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("latest", "Show the most recent calculation", "latest", cmd_latest),
        CommandEntry::new(
            "history",
            "List saved calculations, newest first",
            "history",
            cmd_history,
        ),
        CommandEntry::new("show", "Show one calculation in detail", "show <id>", cmd_show),
        CommandEntry::new("remove", "Delete one calculation", "remove <id>", cmd_remove),
        CommandEntry::new("clear", "Delete every saved calculation", "clear", cmd_clear),
        CommandEntry::new(
            "export",
            "Write a calculation to a JSON file",
            "export <id> [dir]",
            cmd_export,
        ),
    ]
}

pub(crate) fn print_calculation(context: &ShellContext, calculation: &Calculation) {
    let formatters = CliFormatters::new(context.number_style());
    output::section(formatters.heading(calculation));
    output::two_column(&formatters.detail_rows(calculation));
}

fn cmd_latest(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.history.latest() {
        Some(calculation) => print_calculation(context, calculation),
        None => io::print_info(EMPTY_HISTORY),
    }
    Ok(())
}

fn cmd_history(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.history.is_empty() {
        io::print_info(EMPTY_HISTORY);
        return Ok(());
    }
    let formatters = CliFormatters::new(context.number_style());
    let rows: Vec<Vec<String>> = context
        .history
        .list()
        .iter()
        .map(|calculation| formatters.history_row(calculation))
        .collect();
    output::section(format!("History ({})", rows.len()));
    output::table(&HISTORY_HEADERS, &rows);
    Ok(())
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(id) = resolve_id(context, args, "show <id>", "Select a calculation:")? else {
        return Ok(());
    };
    let calculation = find(context, &id)?;
    print_calculation(context, calculation);
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(id) = resolve_id(context, args, "remove <id>", "Select a calculation to delete:")?
    else {
        return Ok(());
    };
    if context.history.remove(&id) {
        io::print_success(format!("Removed {id}"));
    } else {
        io::print_warning(format!("No calculation with id `{id}`; nothing removed."));
    }
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.history.is_empty() {
        io::print_info("History is already empty.");
        return Ok(());
    }
    let prompt = format!("Delete all {} calculations?", context.history.len());
    if !context.confirm(&prompt, false)? {
        io::print_info("Operation cancelled.");
        return Ok(());
    }
    context.history.clear();
    io::print_success("History cleared.");
    Ok(())
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(id) = resolve_id(context, args, "export <id> [dir]", "Select a calculation to export:")?
    else {
        return Ok(());
    };
    let dir = args
        .get(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| context.paths.exports_dir());
    let calculation = find(context, &id)?;
    let path = write_calculation_export(calculation, &dir)?;
    tracing::info!(id = %id, path = %path.display(), "calculation exported");
    io::print_success(format!("Exported to {}", path.display()));
    Ok(())
}

fn find<'a>(context: &'a ShellContext, id: &str) -> Result<&'a Calculation, CommandError> {
    context
        .history
        .get(id)
        .ok_or_else(|| CoreError::NotFound(id.to_string()).into())
}

/// Id from the first argument, or picked from a list in interactive mode.
fn resolve_id(
    context: &ShellContext,
    args: &[&str],
    usage: &str,
    prompt: &str,
) -> Result<Option<String>, CommandError> {
    if let Some(id) = args.first() {
        return Ok(Some(id.to_string()));
    }
    if context.mode() != CliMode::Interactive {
        return Err(CommandError::InvalidArguments(format!("usage: {usage}")));
    }
    let calculations = context.history.list();
    if calculations.is_empty() {
        io::print_info(EMPTY_HISTORY);
        return Ok(None);
    }
    let labels: Vec<String> = calculations
        .iter()
        .map(|calculation| calculation.display_label())
        .collect();
    let index = io::select_index(&context.theme, prompt, &labels, 0)?;
    Ok(calculations.get(index).map(|calculation| calculation.id().to_string()))
}
