use std::{fmt, str::FromStr};

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use super::{
    amount::parse_amount,
    division::{Division, DivisionKey},
    transaction::{Transaction, TransactionId, TransactionKind},
};
use crate::errors::LedgerError;

/// Number of entries shown by the combined history view.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// The day's books: one [`Division`] per [`DivisionKey`].
///
/// Each key has its own field, so the division set cannot grow or shrink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ledger {
    pub id: Uuid,
    pub business_date: NaiveDate,
    recharge: Division,
    money_transfer: Division,
    daily_sales: Division,
    next_sequence: u64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            business_date: Local::now().date_naive(),
            recharge: Division::default(),
            money_transfer: Division::default(),
            daily_sales: Division::default(),
            next_sequence: 1,
        }
    }

    pub fn division(&self, key: DivisionKey) -> &Division {
        match key {
            DivisionKey::Recharge => &self.recharge,
            DivisionKey::MoneyTransfer => &self.money_transfer,
            DivisionKey::DailySales => &self.daily_sales,
        }
    }

    fn division_mut(&mut self, key: DivisionKey) -> &mut Division {
        match key {
            DivisionKey::Recharge => &mut self.recharge,
            DivisionKey::MoneyTransfer => &mut self.money_transfer,
            DivisionKey::DailySales => &mut self.daily_sales,
        }
    }

    /// Divisions in canonical order.
    pub fn divisions(&self) -> impl Iterator<Item = (DivisionKey, &Division)> + '_ {
        DivisionKey::ALL
            .into_iter()
            .map(move |key| (key, self.division(key)))
    }

    pub fn transaction_count(&self) -> usize {
        self.divisions()
            .map(|(_, division)| division.transaction_count())
            .sum()
    }

    /// Validates raw input and posts a transaction stamped with the current time.
    ///
    /// Validation happens before anything is touched: on error the ledger is
    /// unchanged.
    pub fn add_transaction(
        &mut self,
        division: DivisionKey,
        kind: TransactionKind,
        amount: &str,
        description: &str,
    ) -> Result<TransactionId, LedgerError> {
        let amount = match parse_amount(amount) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(%division, %kind, error = %err, "transaction rejected");
                return Err(err);
            }
        };
        self.record(division, kind, amount, description, Local::now())
    }

    /// Posts an already-parsed amount at an explicit time.
    pub fn record(
        &mut self,
        division: DivisionKey,
        kind: TransactionKind,
        amount: f64,
        description: &str,
        at: DateTime<Local>,
    ) -> Result<TransactionId, LedgerError> {
        if !amount.is_finite() {
            tracing::debug!(%division, %kind, amount, "transaction rejected");
            return Err(LedgerError::InvalidAmount(amount.to_string()));
        }
        let description = description.trim();
        if description.is_empty() {
            tracing::debug!(%division, %kind, "transaction rejected: empty description");
            return Err(LedgerError::MissingDescription);
        }
        if !self.stays_finite(division, Change::Post(kind, amount)) {
            tracing::debug!(%division, %kind, amount, "transaction rejected: totals overflow");
            return Err(LedgerError::AmountOutOfRange(amount.to_string()));
        }

        let id = TransactionId(self.next_sequence);
        self.next_sequence += 1;
        let transaction = Transaction::new(id, division, kind, amount, description.to_string(), at);
        let target = self.division_mut(division);
        target.post(transaction);
        tracing::info!(
            %id,
            %division,
            %kind,
            amount,
            profit = target.profit(),
            closing_balance = target.closing_balance(),
            "transaction posted"
        );
        Ok(id)
    }

    /// Replaces a division's opening balance. Unparseable input leaves it as is.
    pub fn set_opening_balance(
        &mut self,
        division: DivisionKey,
        amount: &str,
    ) -> Result<(), LedgerError> {
        let amount = match parse_amount(amount) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(%division, error = %err, "opening balance rejected");
                return Err(err);
            }
        };
        if !self.stays_finite(division, Change::Opening(amount)) {
            tracing::debug!(%division, amount, "opening balance rejected: totals overflow");
            return Err(LedgerError::AmountOutOfRange(amount.to_string()));
        }
        let target = self.division_mut(division);
        target.set_opening_balance(amount);
        tracing::info!(
            %division,
            opening_balance = amount,
            closing_balance = target.closing_balance(),
            "opening balance set"
        );
        Ok(())
    }

    /// Whether every division figure and every shop-wide total would still be
    /// finite after applying `change` to `target`.
    fn stays_finite(&self, target: DivisionKey, change: Change) -> bool {
        let mut sums = [0.0_f64; 5];
        for (key, division) in self.divisions() {
            let mut income = division.income();
            let mut expenses = division.expenses();
            let mut opening = division.opening_balance();
            if key == target {
                match change {
                    Change::Post(TransactionKind::Income, amount) => income += amount,
                    Change::Post(TransactionKind::Expense, amount) => expenses += amount,
                    Change::Opening(amount) => opening = amount,
                }
            }
            let figures = [
                income,
                expenses,
                income - expenses,
                opening,
                opening + income - expenses,
            ];
            if !figures.iter().all(|value| value.is_finite()) {
                return false;
            }
            for (sum, value) in sums.iter_mut().zip(figures) {
                *sum += value;
            }
        }
        sums.iter().all(|value| value.is_finite())
    }

    /// Sums every division. Always computed from current state.
    pub fn aggregate(&self) -> LedgerTotals {
        let totals = self
            .divisions()
            .fold(LedgerTotals::default(), |mut acc, (_, division)| {
                acc.total_income += division.income();
                acc.total_expenses += division.expenses();
                acc.total_profit += division.profit();
                acc.total_opening_balance += division.opening_balance();
                acc.total_closing_balance += division.closing_balance();
                acc
            });
        tracing::debug!(?totals, "aggregate computed");
        totals
    }

    /// Transaction history for `scope`.
    ///
    /// `All` merges every division by descending id and keeps at most `limit`
    /// entries. A single division is returned whole, newest first, and
    /// `limit` does not apply.
    pub fn recent_transactions(&self, limit: usize, scope: HistoryScope) -> Vec<&Transaction> {
        match scope {
            HistoryScope::All => {
                let mut merged: Vec<&Transaction> = self
                    .divisions()
                    .flat_map(|(_, division)| division.transactions())
                    .collect();
                merged.sort_by(|a, b| b.id.cmp(&a.id));
                merged.truncate(limit);
                merged
            }
            HistoryScope::Division(key) => self.division(key).transactions().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Change {
    Post(TransactionKind, f64),
    Opening(f64),
}

/// Which slice of history to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryScope {
    #[default]
    All,
    Division(DivisionKey),
}

impl fmt::Display for HistoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryScope::All => f.write_str("all"),
            HistoryScope::Division(key) => write!(f, "{key}"),
        }
    }
}

impl FromStr for HistoryScope {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(HistoryScope::All);
        }
        value.parse().map(HistoryScope::Division)
    }
}

/// Shop-wide totals across the three divisions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LedgerTotals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
    pub total_opening_balance: f64,
    pub total_closing_balance: f64,
}

impl LedgerTotals {
    /// Profit as a percentage of income; zero when there is no income.
    pub fn profit_margin(&self) -> f64 {
        if self.total_income > 0.0 {
            self.total_profit / self.total_income * 100.0
        } else {
            0.0
        }
    }

    pub fn balance_change(&self) -> f64 {
        self.total_closing_balance - self.total_opening_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn sequence_ids_increase_across_divisions() {
        let mut ledger = Ledger::new();
        let first = ledger
            .record(DivisionKey::Recharge, TransactionKind::Income, 10.0, "a", at(9, 0))
            .unwrap();
        let second = ledger
            .record(DivisionKey::DailySales, TransactionKind::Income, 10.0, "b", at(9, 0))
            .unwrap();
        assert_eq!(first, TransactionId(1));
        assert_eq!(second, TransactionId(2));
    }

    #[test]
    fn record_trims_description_and_rejects_blank() {
        let mut ledger = Ledger::new();
        ledger
            .record(DivisionKey::Recharge, TransactionKind::Income, 1.0, "  SIM  ", at(8, 0))
            .unwrap();
        let stored = ledger.recent_transactions(1, HistoryScope::All)[0];
        assert_eq!(stored.description, "SIM");

        let err = ledger
            .record(DivisionKey::Recharge, TransactionKind::Income, 1.0, " ", at(8, 1))
            .unwrap_err();
        assert_eq!(err, LedgerError::MissingDescription);
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn record_rejects_non_finite_amounts() {
        let mut ledger = Ledger::new();
        let err = ledger
            .record(DivisionKey::Recharge, TransactionKind::Expense, f64::NAN, "x", at(8, 0))
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
        assert_eq!(ledger.transaction_count(), 0);
    }

    #[test]
    fn overflowing_totals_are_rejected() {
        let mut ledger = Ledger::new();
        ledger
            .record(DivisionKey::Recharge, TransactionKind::Income, 1e308, "bulk", at(8, 0))
            .unwrap();
        let err = ledger
            .record(DivisionKey::Recharge, TransactionKind::Income, 1e308, "bulk", at(8, 1))
            .unwrap_err();
        assert!(matches!(err, LedgerError::AmountOutOfRange(_)));

        let err = ledger
            .record(DivisionKey::DailySales, TransactionKind::Income, 1e308, "bulk", at(8, 2))
            .unwrap_err();
        assert!(matches!(err, LedgerError::AmountOutOfRange(_)));

        let err = ledger
            .set_opening_balance(DivisionKey::Recharge, "1e308")
            .unwrap_err();
        assert!(matches!(err, LedgerError::AmountOutOfRange(_)));

        assert_eq!(ledger.transaction_count(), 1);
        assert_eq!(ledger.division(DivisionKey::Recharge).opening_balance(), 0.0);
        let totals = ledger.aggregate();
        assert_eq!(totals.total_income, 1e308);
        assert!(totals.total_closing_balance.is_finite());

        let next = ledger
            .record(DivisionKey::Recharge, TransactionKind::Expense, 5.0, "fee", at(8, 3))
            .unwrap();
        assert_eq!(next, TransactionId(2));
    }

    #[test]
    fn division_history_ignores_limit() {
        let mut ledger = Ledger::new();
        for minute in 0..12 {
            ledger
                .record(
                    DivisionKey::MoneyTransfer,
                    TransactionKind::Income,
                    5.0,
                    "fee",
                    at(10, minute),
                )
                .unwrap();
        }
        let scoped =
            ledger.recent_transactions(3, HistoryScope::Division(DivisionKey::MoneyTransfer));
        assert_eq!(scoped.len(), 12);
        assert_eq!(scoped[0].id, TransactionId(12));
    }

    #[test]
    fn history_scope_parses_all_and_divisions() {
        assert_eq!("ALL".parse(), Ok(HistoryScope::All));
        assert_eq!(
            "money-transfer".parse(),
            Ok(HistoryScope::Division(DivisionKey::MoneyTransfer))
        );
        assert!("weekly".parse::<HistoryScope>().is_err());
    }

    #[test]
    fn margin_is_zero_without_income() {
        let mut ledger = Ledger::new();
        ledger
            .record(DivisionKey::DailySales, TransactionKind::Expense, 50.0, "bags", at(9, 0))
            .unwrap();
        let totals = ledger.aggregate();
        assert_eq!(totals.profit_margin(), 0.0);
        assert_eq!(totals.total_profit, -50.0);
    }

    #[test]
    fn balance_change_tracks_net_flow() {
        let mut ledger = Ledger::new();
        ledger.set_opening_balance(DivisionKey::Recharge, "1000").unwrap();
        ledger
            .record(DivisionKey::Recharge, TransactionKind::Income, 250.0, "plan", at(11, 0))
            .unwrap();
        let totals = ledger.aggregate();
        assert_eq!(totals.balance_change(), 250.0);
        assert_eq!(totals.profit_margin(), 100.0);
    }
}
