use shop_ledger::cli::output::{set_preferences, OutputPreferences};
use shop_ledger::cli::table::{pad, truncate, Alignment, Column, Table};

fn plain() {
    set_preferences(OutputPreferences { plain_mode: true });
}

#[test]
fn widths_grow_to_content_and_respect_max() {
    let mut table = Table::new(vec![
        Column::left("Item").max_width(6),
        Column::right("Amount"),
    ]);
    table.push_row(vec!["Recharge voucher".into(), "₹10.00".into()]);
    table.push_row(vec!["SIM".into(), "₹1250.00".into()]);

    assert_eq!(table.widths(), vec![6, 8]);
}

#[test]
fn pad_and_truncate_follow_alignment() {
    assert_eq!(pad("AB", 4, Alignment::Left), "AB  ");
    assert_eq!(pad("AB", 4, Alignment::Right), "  AB");
    assert_eq!(truncate("Description", 5), "Desc…");
    assert_eq!(truncate("Short", 5), "Short");
    assert_eq!(truncate("abc", 0), "");
}

#[test]
fn render_lays_out_header_rule_and_rows() {
    plain();
    let mut table = Table::new(vec![Column::left("Type"), Column::right("Amount")]);
    table.push_row(vec!["income".into(), "+₹5.00".into()]);
    table.push_row(vec!["expense".into(), "-₹12.50".into()]);

    let rendered = table.render();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Type      Amount",
            "----------------",
            "income    +₹5.00",
            "expense  -₹12.50",
        ]
    );
}
