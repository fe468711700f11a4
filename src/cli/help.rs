use crate::cli::commands::{CommandDefinition, CommandRegistry};
use crate::cli::io;
use crate::cli::output::section;
use crate::ledger::DivisionKey;

pub fn print_overview(registry: &CommandRegistry) {
    section("Available commands");
    for entry in registry.iter() {
        io::print_info(format!("  {:<10} {}", entry.name, entry.description));
    }
    let keys: Vec<&str> = DivisionKey::ALL.iter().map(|key| key.as_str()).collect();
    io::print_info(format!("Divisions: {}", keys.join(", ")));
    io::print_info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandDefinition) {
    section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
}
