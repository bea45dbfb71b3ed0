pub mod commands;
pub mod core;
pub mod formatters;
pub mod forms;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
pub mod shell;
pub mod shell_context;

pub use shell::run_cli;
