use thiserror::Error;

/// Error type for rejected ledger commands. A rejected command never mutates
/// the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Amount is required")]
    MissingAmount,
    #[error("Invalid amount `{0}`: expected a number")]
    InvalidAmount(String),
    #[error("Amount `{0}` would push the day's totals out of range")]
    AmountOutOfRange(String),
    #[error("Description is required")]
    MissingDescription,
    #[error("Unknown division `{0}` (expected recharge, money-transfer or daily-sales)")]
    UnknownDivision(String),
    #[error("Unknown transaction type `{0}` (expected income or expense)")]
    UnknownKind(String),
}
