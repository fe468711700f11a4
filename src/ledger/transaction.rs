use std::{fmt, str::FromStr};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use super::division::DivisionKey;
use crate::errors::LedgerError;

const TIME_LABEL_FORMAT: &str = "%H:%M:%S";

/// Monotonic identifier assigned by the ledger; higher means more recent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 2] = [TransactionKind::Income, TransactionKind::Expense];

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(TransactionKind::Income),
            "expense" | "out" => Ok(TransactionKind::Expense),
            _ => Err(LedgerError::UnknownKind(value.trim().to_string())),
        }
    }
}

/// A posted entry. Transactions are never edited or removed once recorded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
    pub time: String,
    pub recorded_at: DateTime<Local>,
    pub division: DivisionKey,
}

impl Transaction {
    pub(crate) fn new(
        id: TransactionId,
        division: DivisionKey,
        kind: TransactionKind,
        amount: f64,
        description: String,
        recorded_at: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            kind,
            amount,
            description,
            time: recorded_at.format(TIME_LABEL_FORMAT).to_string(),
            recorded_at,
            division,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn kind_parses_aliases_case_insensitively() {
        assert_eq!("Income".parse(), Ok(TransactionKind::Income));
        assert_eq!(" OUT ".parse(), Ok(TransactionKind::Expense));
        assert_eq!(
            "refund".parse::<TransactionKind>(),
            Err(LedgerError::UnknownKind("refund".into()))
        );
    }

    #[test]
    fn time_label_uses_wall_clock() {
        let at = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();
        let txn = Transaction::new(
            TransactionId(1),
            DivisionKey::Recharge,
            TransactionKind::Income,
            10.0,
            "top-up".into(),
            at,
        );
        assert_eq!(txn.time, "14:05:07");
        assert_eq!(txn.kind, TransactionKind::Income);
    }
}
