#![doc(test(attr(deny(warnings))))]

//! Shop Ledger keeps a shop's daily cash book across its three divisions
//! (mobile recharge, money transfer and daily sales) and derives profit and
//! closing balances as entries are posted.

pub mod cli;
pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Shop Ledger tracing initialized.");
    });
}
