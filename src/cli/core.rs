//! Command dispatch, error types and shell context helpers.

use std::io;

use dialoguer::theme::ColorfulTheme;
use ratecard_config::{Config, ConfigError, ConfigManager, DataPaths};
use ratecard_core::{CoreError, HistoryStore, RateTable, ValidationErrors};
use ratecard_storage_json::JsonHistoryStorage;
use thiserror::Error;

use crate::currency::{self, NumberStyle};

use super::commands;
use super::io as cli_io;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Failure of a single command; the shell reports it and keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Invalid input: {0}")]
    Validation(ValidationErrors),
    #[error(transparent)]
    Core(CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(errors) => CommandError::Validation(errors),
            other => CommandError::Core(other),
        }
    }
}

/// Failure that stops the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_paths(mode, DataPaths::resolve())
    }

    /// Builds a context whose files all live under `paths`.
    pub fn with_paths(mode: CliMode, paths: DataPaths) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = ConfigManager::from_paths(&paths);
        let config = match config_manager.load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    path = %config_manager.config_path().display(),
                    "config unreadable, using defaults"
                );
                Config::default()
            }
        };
        output::set_color_enabled(config.ui_color_enabled);

        let storage = JsonHistoryStorage::new(paths.history_dir())?;
        let history = HistoryStore::open_default(Box::new(storage));

        Ok(ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            paths,
            history,
            config_manager,
            config,
            rates: None,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn prompt(&self) -> String {
        format!("ratecard [{}]> ", self.history.len())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn number_style(&self) -> NumberStyle {
        NumberStyle::for_locale(&self.config.locale)
    }

    /// The session's rate table, fetched on first call.
    pub(crate) fn rates(&mut self) -> &RateTable {
        if self.rates.is_none() {
            let table = currency::load_rates(&self.config);
            self.rates = Some(table);
        }
        self.rates.get_or_insert_with(RateTable::new)
    }

    /// Drops the cached table so the next lookup refetches with new settings.
    pub(crate) fn invalidate_rates(&mut self) {
        self.rates = None;
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    /// Asks for confirmation in interactive mode; scripts always proceed.
    pub(crate) fn confirm(&self, prompt: &str, default: bool) -> Result<bool, CommandError> {
        match self.mode {
            CliMode::Script => Ok(true),
            CliMode::Interactive => cli_io::confirm_action(&self.theme, prompt, default),
        }
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            cli_io::print_info(format!("Did you mean `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit ratecard?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_info("Use `help <command>` for usage details.");
            }
            CommandError::Validation(errors) => {
                cli_io::print_error("Input rejected:");
                for error in errors.iter() {
                    cli_io::print_info(format!("  {}: {}", error.field, error.message));
                }
            }
            other => cli_io::print_error(other),
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => return Err(CommandError::InvalidArguments(err.to_string())),
        };
        let Some((raw, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(&raw.to_lowercase(), raw, &args)
    }
}

#[cfg(test)]
mod tests {
    use ratecard_domain::{Identifiable, NamedEntity};
    use tempfile::TempDir;

    use super::*;

    fn script_context() -> (TempDir, ShellContext) {
        let dir = TempDir::new().expect("tempdir");
        let context = ShellContext::with_paths(CliMode::Script, DataPaths::new(dir.path().into()))
            .expect("context");
        (dir, context)
    }

    #[test]
    fn calc_adds_to_history() {
        let (_dir, mut context) = script_context();
        context
            .process_line("calc --name Website --costs 1000 --days 10")
            .expect("calc");
        assert_eq!(context.history.len(), 1);
        let latest = context.history.latest().expect("latest");
        assert_eq!(latest.name(), "Website");
        assert!(latest.result().project_rate.is_some());
    }

    #[test]
    fn invalid_input_surfaces_field_errors() {
        let (_dir, mut context) = script_context();
        let err = context
            .process_line("calc --name Bad --tax 100")
            .expect_err("tax of 100 is rejected");
        match err {
            CommandError::Validation(errors) => assert!(errors.message_for("taxRate").is_some()),
            other => panic!("unexpected error: {other}"),
        }
        assert!(context.history.is_empty());
    }

    #[test]
    fn remove_and_clear_update_history() {
        let (_dir, mut context) = script_context();
        context.process_line("calc --name One").expect("calc");
        context.process_line("calc --name Two").expect("calc");
        let id = context.history.latest().expect("latest").id().to_string();

        context.process_line(&format!("remove {id}")).expect("remove");
        assert_eq!(context.history.len(), 1);
        assert!(context.history.get(&id).is_none());

        context.process_line("clear").expect("clear");
        assert!(context.history.is_empty());
    }

    #[test]
    fn exit_stops_the_loop() {
        let (_dir, mut context) = script_context();
        assert_eq!(
            context.process_line("exit").expect("exit"),
            LoopControl::Exit
        );
        assert_eq!(
            context.process_line("histroy").expect("unknown command"),
            LoopControl::Continue
        );
    }

    #[test]
    fn config_set_persists() {
        let (dir, mut context) = script_context();
        context
            .process_line("config set currency eur")
            .expect("config set");
        assert_eq!(context.config.currency, "EUR");

        let reopened =
            ShellContext::with_paths(CliMode::Script, DataPaths::new(dir.path().into()))
                .expect("context");
        assert_eq!(reopened.config.currency, "EUR");
    }
}
