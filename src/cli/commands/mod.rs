use std::collections::HashMap;

pub mod balance;
pub mod config;
pub mod report;
pub mod system;
pub mod transaction;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::ledger::DivisionKey;

pub(crate) fn all_definitions() -> Vec<CommandDefinition> {
    let mut commands = Vec::new();
    commands.extend(transaction::definitions());
    commands.extend(balance::definitions());
    commands.extend(report::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub type CommandHandler = fn(&mut ShellContext, &[&str]) -> CommandResult;

#[derive(Clone)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
    pub handler: CommandHandler,
}

impl CommandDefinition {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        usage: &'static str,
        handler: CommandHandler,
    ) -> Self {
        Self {
            name,
            description,
            usage,
            handler,
        }
    }
}

pub struct CommandRegistry {
    commands: HashMap<&'static str, CommandDefinition>,
    order: Vec<&'static str>,
}

impl CommandRegistry {
    pub fn new(definitions: Vec<CommandDefinition>) -> Self {
        let mut commands = HashMap::new();
        let mut order = Vec::new();
        for definition in definitions {
            order.push(definition.name);
            commands.insert(definition.name, definition);
        }
        Self { commands, order }
    }

    pub fn get(&self, name: &str) -> Option<&CommandDefinition> {
        self.commands.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDefinition> {
        self.order
            .iter()
            .filter_map(move |name| self.commands.get(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().copied()
    }
}

/// Division chosen from the argument list, or by prompt when interactive.
pub(crate) fn division_arg(
    context: &ShellContext,
    arg: Option<&str>,
    usage: &str,
) -> Result<DivisionKey, CommandError> {
    match arg {
        Some(raw) => Ok(raw.parse()?),
        None if context.is_interactive() => {
            let labels: Vec<&str> = DivisionKey::ALL.iter().map(|key| key.label()).collect();
            let idx = io::select_option(&context.theme, "Division", labels.as_slice())?;
            Ok(DivisionKey::ALL[idx])
        }
        None => Err(CommandError::InvalidArguments(format!("usage: {usage}"))),
    }
}
