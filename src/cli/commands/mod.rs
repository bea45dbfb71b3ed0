pub mod calc;
pub mod config;
pub mod history;
pub mod rates;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(calc::definitions());
    commands.extend(history::definitions());
    commands.extend(rates::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in all_entries() {
        registry.register(entry);
    }
}
