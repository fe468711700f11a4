use std::{collections::VecDeque, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::transaction::{Transaction, TransactionKind};
use crate::errors::LedgerError;

/// The shop's three business lines. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DivisionKey {
    Recharge,
    MoneyTransfer,
    DailySales,
}

impl DivisionKey {
    /// Canonical display order.
    pub const ALL: [DivisionKey; 3] = [
        DivisionKey::Recharge,
        DivisionKey::MoneyTransfer,
        DivisionKey::DailySales,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DivisionKey::Recharge => "recharge",
            DivisionKey::MoneyTransfer => "money-transfer",
            DivisionKey::DailySales => "daily-sales",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DivisionKey::Recharge => "Mobile Recharge",
            DivisionKey::MoneyTransfer => "Money Transfer",
            DivisionKey::DailySales => "Daily Sales",
        }
    }
}

impl fmt::Display for DivisionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DivisionKey {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "recharge" => Ok(DivisionKey::Recharge),
            "money-transfer" | "money_transfer" | "transfer" => Ok(DivisionKey::MoneyTransfer),
            "daily-sales" | "daily_sales" | "sales" => Ok(DivisionKey::DailySales),
            _ => Err(LedgerError::UnknownDivision(value.trim().to_string())),
        }
    }
}

/// Running totals for one division.
///
/// Fields are private so that `profit` and `closing_balance` can only change
/// through [`Division::post`] and [`Division::set_opening_balance`], both of
/// which recompute them. Serialize-only: a division is never rebuilt from
/// outside data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Division {
    income: f64,
    expenses: f64,
    profit: f64,
    opening_balance: f64,
    closing_balance: f64,
    transactions: VecDeque<Transaction>,
}

impl Division {
    pub fn income(&self) -> f64 {
        self.income
    }

    pub fn expenses(&self) -> f64 {
        self.expenses
    }

    pub fn profit(&self) -> f64 {
        self.profit
    }

    pub fn opening_balance(&self) -> f64 {
        self.opening_balance
    }

    pub fn closing_balance(&self) -> f64 {
        self.closing_balance
    }

    /// Transactions, newest first.
    pub fn transactions(&self) -> impl ExactSizeIterator<Item = &Transaction> + '_ {
        self.transactions.iter()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub(crate) fn post(&mut self, transaction: Transaction) {
        match transaction.kind {
            TransactionKind::Income => self.income += transaction.amount,
            TransactionKind::Expense => self.expenses += transaction.amount,
        }
        self.transactions.push_front(transaction);
        self.recompute();
    }

    pub(crate) fn set_opening_balance(&mut self, amount: f64) {
        self.opening_balance = amount;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.profit = self.income - self.expenses;
        self.closing_balance = self.opening_balance + self.income - self.expenses;
    }
}
