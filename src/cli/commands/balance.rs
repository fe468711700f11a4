use crate::cli::commands::{division_arg, CommandDefinition};
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::currency::format_amount;

const USAGE: &str = "opening <division> <amount>";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "opening",
        "Set a division's opening balance (cash in hand, bank float)",
        USAGE,
        cmd_opening,
    )]
}

fn cmd_opening(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let division = division_arg(context, args.first().copied(), USAGE)?;
    let amount = match args.get(1) {
        Some(raw) => raw.to_string(),
        None if context.is_interactive() => io::prompt_text(&context.theme, "Opening balance")?,
        None => String::new(),
    };

    context.ledger.set_opening_balance(division, &amount)?;

    let currency = context.config.currency();
    let summary = context.ledger.division(division);
    io::print_success(format!(
        "Opening balance for {} set to {}. Closing balance {}.",
        division.label(),
        format_amount(summary.opening_balance(), &currency),
        format_amount(summary.closing_balance(), &currency),
    ));
    Ok(())
}
