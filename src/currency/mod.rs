//! Money and percentage rendering for reports.

use serde::{Deserialize, Serialize};

use crate::ledger::TransactionKind;

/// Amounts are always rendered with this many decimals.
pub const MINOR_UNITS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencySettings {
    pub symbol: String,
    pub code: String,
}

impl CurrencySettings {
    pub fn new(symbol: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            code: code.into().to_uppercase(),
        }
    }
}

impl Default for CurrencySettings {
    fn default() -> Self {
        Self::new("₹", "INR")
    }
}

fn magnitude(value: f64) -> String {
    format!("{:.*}", MINOR_UNITS, value.abs())
}

/// Rounds away the sign of values that display as zero, so `-0.001` prints
/// as `0.00` rather than `-0.00`.
fn is_displayed_negative(value: f64) -> bool {
    value < 0.0 && magnitude(value).chars().any(|ch| ch.is_ascii_digit() && ch != '0')
}

/// `₹1234.50`, `-₹200.00`.
pub fn format_amount(value: f64, settings: &CurrencySettings) -> String {
    let sign = if is_displayed_negative(value) { "-" } else { "" };
    format!("{sign}{}{}", settings.symbol, magnitude(value))
}

/// Transaction amounts carry the sign of their effect on the balance:
/// `+₹500.00` for income, `-₹200.00` for an expense. A negative expense
/// therefore shows as a credit.
pub fn format_signed(kind: TransactionKind, amount: f64, settings: &CurrencySettings) -> String {
    let effect = match kind {
        TransactionKind::Income => amount,
        TransactionKind::Expense => -amount,
    };
    let sign = if is_displayed_negative(effect) { '-' } else { '+' };
    format!("{sign}{}{}", settings.symbol, magnitude(effect))
}

pub fn format_percent(value: f64) -> String {
    let rendered = format!("{:.1}", value);
    if rendered == "-0.0" {
        "0.0%".to_string()
    } else {
        format!("{rendered}%")
    }
}
