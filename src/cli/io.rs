use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::core::CommandError;
use crate::cli::output;

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

pub fn prompt_text(
    theme: &ColorfulTheme,
    prompt: &str,
    initial: &str,
) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

/// Prompt for a number in `min..=max`; re-asks until the answer fits.
pub fn prompt_number(
    theme: &ColorfulTheme,
    prompt: &str,
    default: f64,
    min: f64,
    max: f64,
) -> Result<f64, CommandError> {
    Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .validate_with(move |value: &f64| -> Result<(), String> {
            if value.is_finite() && *value >= min && *value <= max {
                Ok(())
            } else {
                Err(format!("enter a value between {min} and {max}"))
            }
        })
        .interact_text()
        .map_err(CommandError::from)
}

/// Let the user pick one of `items`, returning its index.
pub fn select_index<T: ToString>(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[T],
    default: usize,
) -> Result<usize, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}
