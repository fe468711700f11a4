use assert_cmd::Command;
use predicates::prelude::*;
use std::error::Error;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("shop_ledger_cli")?;
    cmd.env("SHOP_LEDGER_CLI_SCRIPT", "1")
        .env("SHOP_LEDGER_HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn script_mode_records_and_reports() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    script_command(&home)?
        .write_stdin(
            "add recharge income 500 \"SIM sale\"\n\
             opening recharge 1000\n\
             add daily-sales expense 200 stock purchase\n\
             summary\n\
             history\n\
             exit\n",
        )
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Recorded #1 income for Mobile Recharge")
                .and(predicate::str::contains("Closing balance ₹1500.00"))
                .and(predicate::str::contains("Net Profit       ₹300.00"))
                .and(predicate::str::contains("Profit Margin    60.0%"))
                .and(predicate::str::contains("stock purchase")),
        );
    Ok(())
}

#[test]
fn rejected_input_warns_and_keeps_going() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    script_command(&home)?
        .write_stdin(
            "add recharge income\n\
             add recharge expense abc fuel\n\
             opening money-transfer lots\n\
             add recharge income 5 \"\"\n\
             divisions\n",
        )
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Nothing recorded: Amount is required")
                .and(predicate::str::contains("Invalid amount `abc`"))
                .and(predicate::str::contains("Invalid amount `lots`"))
                .and(predicate::str::contains("Description is required"))
                .and(predicate::str::contains("Recorded").not()),
        )
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn unknown_command_gets_a_suggestion() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    script_command(&home)?
        .write_stdin("sumary\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Unknown command `sumary`")
                .and(predicate::str::contains("Suggestion: `summary`?")),
        );
    Ok(())
}

#[test]
fn config_changes_are_saved_and_used() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    script_command(&home)?
        .write_stdin("config set currency-symbol $\nconfig set history-limit 0\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("currency-symbol set to $.")
                .and(predicate::str::contains("Setting not changed")),
        );

    let saved = std::fs::read_to_string(home.path().join("config.json"))?;
    assert!(saved.contains("\"currency_symbol\": \"$\""));
    assert!(saved.contains("\"history_limit\": 10"));

    script_command(&home)?
        .write_stdin("add sales income 12.5 bread\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Profit $12.50"));
    Ok(())
}

#[test]
fn snapshot_prints_json() -> Result<(), Box<dyn Error>> {
    let home = TempDir::new()?;
    let output = script_command(&home)?
        .write_stdin("add transfer income 40 commission\nsnapshot\n")
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout)?;
    let start = stdout.find('{').ok_or("no json in output")?;
    let json: serde_json::Value = serde_json::from_str(&stdout[start..])?;
    assert_eq!(json["totals"]["total_income"], 40.0);
    assert_eq!(
        json["ledger"]["money_transfer"]["transactions"][0]["description"],
        "commission"
    );
    Ok(())
}
