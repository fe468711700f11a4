use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::output::section;

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new("help", "Show available commands", "help [command]", cmd_help),
        CommandDefinition::new("version", "Show version information", "version", cmd_version),
        CommandDefinition::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }
    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_version(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    section(format!("Shop Ledger {}", env!("CARGO_PKG_VERSION")));
    io::print_info(format!("  Session : {}", context.ledger.id));
    io::print_info(format!(
        "  Date    : {}",
        context.ledger.business_date.format("%Y-%m-%d")
    ));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
