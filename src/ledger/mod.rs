//! Day-book model: divisions, transactions and the derived totals.

pub mod amount;
pub mod division;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use amount::parse_amount;
pub use division::{Division, DivisionKey};
pub use ledger::{HistoryScope, Ledger, LedgerTotals, DEFAULT_HISTORY_LIMIT};
pub use transaction::{Transaction, TransactionId, TransactionKind};
