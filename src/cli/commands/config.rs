use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::config::ConfigKey;

const USAGE: &str = "config [show | set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "config",
        "Show or change display preferences",
        USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => show(context),
        ["set", key, value @ ..] if !value.is_empty() => {
            let key: ConfigKey = key.parse()?;
            let mut updated = context.config.clone();
            updated.set(key, &value.join(" "))?;
            context.config_manager.save(&updated)?;
            context.config = updated;
            context.apply_preferences();
            io::print_success(format!("{key} set to {}.", context.config.get(key)));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!("usage: {USAGE}"))),
    }
}

fn show(context: &ShellContext) -> CommandResult {
    section("Configuration");
    for key in ConfigKey::ALL {
        io::print_info(format!("  {:<16} {}", key.as_str(), context.config.get(key)));
    }
    io::print_info(format!(
        "  stored at {}",
        context.config_manager.path().display()
    ));
    Ok(())
}
