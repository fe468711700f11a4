use shop_ledger::{
    cli::{CliMode, ShellContext},
    config::ConfigManager,
    init,
    ledger::DivisionKey,
};
use tempfile::TempDir;

#[test]
fn shell_context_processes_a_day() {
    init();

    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
    let mut context =
        ShellContext::with_config_manager(CliMode::Script, manager).expect("shell context");

    for line in [
        "opening recharge 250",
        "add recharge income 80 top-up",
        "add money-transfer expense 15 \"agent fee\"",
        "# comments are skipped",
        "",
    ] {
        assert!(context.process_line(line).expect("command succeeds"));
    }

    assert!(context.process_line("add recharge income").is_err());
    assert_eq!(context.ledger.transaction_count(), 2);
    assert_eq!(
        context.ledger.division(DivisionKey::Recharge).closing_balance(),
        330.0
    );
    assert_eq!(context.ledger.aggregate().total_profit, 65.0);

    assert!(!context.process_line("exit").expect("exit succeeds"));
    assert!(!context.running);
}
