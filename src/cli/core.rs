//! Shell context, dispatch and error types.

use std::io;

use dialoguer::theme::ColorfulTheme;
use rustyline::error::ReadlineError;
use strsim::levenshtein;

use crate::{
    config::{Config, ConfigError, ConfigManager},
    errors::LedgerError,
    ledger::Ledger,
};

use super::commands::{self, CommandDefinition, CommandRegistry};
use super::io as cli_io;
use super::output::{set_preferences, OutputPreferences};

const SUGGESTION_DISTANCE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Everything a command handler can reach: the day's ledger, preferences
/// and the command table.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub ledger: Ledger,
    pub config: Config,
    pub config_manager: ConfigManager,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        Self::with_config_manager(mode, ConfigManager::new())
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let config = config_manager.load()?;
        let context = Self {
            mode,
            registry: CommandRegistry::new(commands::all_definitions()),
            ledger: Ledger::new(),
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            running: true,
        };
        context.apply_preferences();
        tracing::debug!(ledger = %context.ledger.id, ?mode, "shell context ready");
        Ok(context)
    }

    pub(crate) fn apply_preferences(&self) {
        set_preferences(OutputPreferences {
            plain_mode: self.config.plain_mode,
        });
    }

    pub fn is_interactive(&self) -> bool {
        self.mode == CliMode::Interactive
    }

    pub fn prompt(&self) -> String {
        format!(
            "shop-ledger [{} entries] > ",
            self.ledger.transaction_count()
        )
    }

    pub fn command(&self, name: &str) -> Option<&CommandDefinition> {
        self.registry.get(name)
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.get(command).map(|entry| entry.handler) else {
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
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        let needle = input.to_ascii_lowercase();
        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);
        if let Some((distance, name)) = best {
            if distance <= SUGGESTION_DISTANCE {
                cli_io::print_info(format!("Suggestion: `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell? Today's entries will be lost", false)?)
    }

    /// Prints a failed command. Rejected input is a warning: the ledger was
    /// not touched and the shell carries on.
    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_info("Use `help <command>` for usage details.");
            }
            CommandError::Ledger(err) => {
                cli_io::print_warning(format!("Nothing recorded: {err}"));
            }
            CommandError::Config(err) => {
                cli_io::print_warning(format!("Setting not changed: {err}"));
            }
            other => cli_io::print_error(other),
        }
    }

    /// Parses and runs one line of input.
    pub fn process_line(&mut self, line: &str) -> Result<bool, CommandError> {
        super::shell::handle_line(self, line).map(|control| control == LoopControl::Continue)
    }
}
