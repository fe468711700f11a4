use crate::cli::commands::{division_arg, CommandDefinition};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::currency::format_amount;
use crate::ledger::TransactionKind;

const USAGE: &str = "add <division> <income|expense> <amount> <description...>";

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![CommandDefinition::new(
        "add",
        "Record an income or expense for a division",
        USAGE,
        cmd_add,
    )]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let division = division_arg(context, args.first().copied(), USAGE)?;

    let kind = match args.get(1) {
        Some(raw) => raw.parse::<TransactionKind>()?,
        None if context.is_interactive() => {
            let idx = io::select_option(&context.theme, "Type", &TransactionKind::ALL)?;
            TransactionKind::ALL[idx]
        }
        None => return Err(CommandError::InvalidArguments(format!("usage: {USAGE}"))),
    };

    let prompt_rest = context.is_interactive() && args.len() <= 2;
    let amount = match args.get(2) {
        Some(raw) => raw.to_string(),
        None if prompt_rest => io::prompt_text(&context.theme, "Amount")?,
        None => String::new(),
    };
    let description = if args.len() > 3 {
        args[3..].join(" ")
    } else if prompt_rest {
        io::prompt_text(&context.theme, "Description")?
    } else {
        String::new()
    };

    let id = context
        .ledger
        .add_transaction(division, kind, &amount, &description)?;

    let currency = context.config.currency();
    let summary = context.ledger.division(division);
    io::print_success(format!(
        "Recorded {id} {kind} for {}. Profit {}, closing balance {}.",
        division.label(),
        format_amount(summary.profit(), &currency),
        format_amount(summary.closing_balance(), &currency),
    ));
    Ok(())
}
