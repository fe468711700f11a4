use serde::Serialize;

use crate::cli::commands::CommandDefinition;
use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::views;
use crate::ledger::{HistoryScope, Ledger, LedgerTotals};

pub(crate) fn definitions() -> Vec<CommandDefinition> {
    vec![
        CommandDefinition::new(
            "summary",
            "Show shop-wide totals and the daily balance flow",
            "summary",
            cmd_summary,
        ),
        CommandDefinition::new(
            "divisions",
            "Show opening, income, expenses, profit and closing per division",
            "divisions",
            cmd_divisions,
        ),
        CommandDefinition::new(
            "history",
            "List transactions for all divisions or just one",
            "history [all|recharge|money-transfer|daily-sales]",
            cmd_history,
        ),
        CommandDefinition::new(
            "snapshot",
            "Print the ledger and its totals as JSON",
            "snapshot",
            cmd_snapshot,
        ),
    ]
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = context.ledger.aggregate();
    let currency = context.config.currency();
    section(format!(
        "Daily Summary {}",
        context.ledger.business_date.format("%Y-%m-%d")
    ));
    let rows = views::summary_rows(&totals, &currency);
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        io::print_info(format!("  {label:<width$}  {value}"));
    }
    io::print_info(format!("  {}", views::balance_flow_line(&totals, &currency)));
    Ok(())
}

fn cmd_divisions(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let table = views::division_table(&context.ledger, &context.config.currency());
    section("Divisions");
    io::print_info(table.render());
    Ok(())
}

fn cmd_history(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let scope = match args.first() {
        Some(raw) => raw.parse::<HistoryScope>()?,
        None => HistoryScope::All,
    };
    let limit = context.config.history_limit;
    let transactions = context.ledger.recent_transactions(limit, scope);

    section(views::history_title(scope, transactions.len(), limit));
    if transactions.is_empty() {
        io::print_info("No transactions recorded yet.");
        return Ok(());
    }
    let table = views::history_table(&transactions, scope, &context.config.currency());
    io::print_info(table.render());
    Ok(())
}

#[derive(Serialize)]
struct Snapshot<'a> {
    ledger: &'a Ledger,
    totals: LedgerTotals,
    profit_margin: f64,
}

fn cmd_snapshot(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let totals = context.ledger.aggregate();
    let snapshot = Snapshot {
        ledger: &context.ledger,
        totals,
        profit_margin: totals.profit_margin(),
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
