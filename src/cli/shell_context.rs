//! Shared runtime state for CLI interactions and command execution.

use dialoguer::theme::ColorfulTheme;
use ratecard_config::{Config, ConfigManager, DataPaths};
use ratecard_core::{HistoryStore, RateTable};

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub theme: ColorfulTheme,
    pub paths: DataPaths,
    /// The single history instance for the session.
    pub history: HistoryStore,
    pub config_manager: ConfigManager,
    pub config: Config,
    /// Filled on first use; at most one fetch per session.
    pub rates: Option<RateTable>,
    pub last_command: Option<String>,
    pub running: bool,
}
