use shop_ledger::{
    currency::{format_amount, format_percent, format_signed, CurrencySettings},
    ledger::TransactionKind,
};

#[test]
fn amounts_always_show_two_decimals() {
    let rupee = CurrencySettings::default();
    assert_eq!(format_amount(500.0, &rupee), "₹500.00");
    assert_eq!(format_amount(1234.5, &rupee), "₹1234.50");
    assert_eq!(format_amount(0.005, &rupee), "₹0.01");
    assert_eq!(format_amount(-200.0, &rupee), "-₹200.00");
}

#[test]
fn symbol_follows_settings() {
    let dollars = CurrencySettings::new("$", "usd");
    assert_eq!(format_amount(12.0, &dollars), "$12.00");
}

#[test]
fn signed_amounts_follow_kind() {
    let rupee = CurrencySettings::default();
    assert_eq!(format_signed(TransactionKind::Income, 500.0, &rupee), "+₹500.00");
    assert_eq!(format_signed(TransactionKind::Expense, 200.0, &rupee), "-₹200.00");
    assert_eq!(format_signed(TransactionKind::Expense, -25.0, &rupee), "+₹25.00");
    assert_eq!(format_signed(TransactionKind::Income, 0.0, &rupee), "+₹0.00");
}

#[test]
fn percent_uses_one_decimal() {
    assert_eq!(format_percent(60.0), "60.0%");
    assert_eq!(format_percent(33.333), "33.3%");
    assert_eq!(format_percent(-12.26), "-12.3%");
}
