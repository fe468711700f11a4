pub mod commands;
pub mod core;
pub mod help;
pub mod io;
pub mod output;
mod shell;
pub mod table;
pub mod views;

pub use self::core::{CliError, CliMode, CommandError, ShellContext};
pub use shell::{run_cli, SCRIPT_ENV};
