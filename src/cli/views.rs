//! Report layouts shared by the shell commands.
//!
//! Everything here returns strings so the layouts can be checked without a
//! terminal.

use crate::cli::table::{Column, Table};
use crate::currency::{format_amount, format_percent, format_signed, CurrencySettings};
use crate::ledger::{HistoryScope, Ledger, LedgerTotals, Transaction};

/// The six headline figures, in display order.
pub fn summary_rows(
    totals: &LedgerTotals,
    currency: &CurrencySettings,
) -> Vec<(&'static str, String)> {
    vec![
        ("Total Income", format_amount(totals.total_income, currency)),
        ("Total Expenses", format_amount(totals.total_expenses, currency)),
        ("Net Profit", format_amount(totals.total_profit, currency)),
        ("Profit Margin", format_percent(totals.profit_margin())),
        ("Opening Balance", format_amount(totals.total_opening_balance, currency)),
        ("Closing Balance", format_amount(totals.total_closing_balance, currency)),
    ]
}

/// `opening + income - expenses = closing`, followed by the net change.
pub fn balance_flow_line(totals: &LedgerTotals, currency: &CurrencySettings) -> String {
    format!(
        "Balance flow: {} + {} - {} = {} (change {})",
        format_amount(totals.total_opening_balance, currency),
        format_amount(totals.total_income, currency),
        format_amount(totals.total_expenses, currency),
        format_amount(totals.total_closing_balance, currency),
        format_amount(totals.balance_change(), currency),
    )
}

pub fn division_table(ledger: &Ledger, currency: &CurrencySettings) -> Table {
    let mut table = Table::new(vec![
        Column::left("Division"),
        Column::right("Opening"),
        Column::right("Income"),
        Column::right("Expenses"),
        Column::right("Profit"),
        Column::right("Closing"),
        Column::right("Entries"),
    ]);
    for (key, division) in ledger.divisions() {
        table.push_row(vec![
            key.label().to_string(),
            format_amount(division.opening_balance(), currency),
            format_amount(division.income(), currency),
            format_amount(division.expenses(), currency),
            format_amount(division.profit(), currency),
            format_amount(division.closing_balance(), currency),
            division.transaction_count().to_string(),
        ]);
    }
    table
}

/// The combined view names each entry's division; a single-division view
/// leaves that column out.
pub fn history_table(
    transactions: &[&Transaction],
    scope: HistoryScope,
    currency: &CurrencySettings,
) -> Table {
    let show_division = matches!(scope, HistoryScope::All);
    let mut columns = vec![Column::right("#"), Column::left("Time")];
    if show_division {
        columns.push(Column::left("Division"));
    }
    columns.extend([
        Column::left("Type"),
        Column::left("Description").max_width(32),
        Column::right("Amount"),
    ]);

    let mut table = Table::new(columns);
    for txn in transactions {
        let mut row = vec![txn.id.0.to_string(), txn.time.clone()];
        if show_division {
            row.push(txn.division.label().to_string());
        }
        row.extend([
            txn.kind.to_string(),
            txn.description.clone(),
            format_signed(txn.kind, txn.amount, currency),
        ]);
        table.push_row(row);
    }
    table
}

pub fn history_title(scope: HistoryScope, shown: usize, limit: usize) -> String {
    match scope {
        HistoryScope::All => format!("Recent Transactions (latest {shown} of up to {limit})"),
        HistoryScope::Division(key) => format!("{} Transactions ({shown})", key.label()),
    }
}
