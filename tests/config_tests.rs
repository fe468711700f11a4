use shop_ledger::config::{Config, ConfigError, ConfigKey, ConfigManager};
use tempfile::TempDir;

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
    let config = manager.load().expect("load defaults");
    assert_eq!(config, Config::default());
    assert_eq!(config.currency_symbol, "₹");
    assert_eq!(config.history_limit, 10);
}

#[test]
fn save_then_load_keeps_changes() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().join("nested"));

    let mut config = Config::default();
    config.set(ConfigKey::HistoryLimit, "25").expect("valid limit");
    config.set(ConfigKey::PlainMode, "on").expect("valid flag");
    manager.save(&config).expect("save config");

    assert!(manager.path().exists());
    assert!(!manager.path().with_extension("json.tmp").exists());
    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.history_limit, 25);
    assert!(loaded.plain_mode);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
    std::fs::write(manager.path(), r#"{ "currency_symbol": "Rs." }"#).expect("write config");

    let loaded = manager.load().expect("load config");
    assert_eq!(loaded.currency_symbol, "Rs.");
    assert_eq!(loaded.currency_code, "INR");
    assert_eq!(loaded.history_limit, 10);
}

#[test]
fn corrupt_file_is_an_error() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
    std::fs::write(manager.path(), "not json").expect("write config");
    assert!(manager.load().is_err());
}

#[test]
fn out_of_range_values_in_file_are_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());

    std::fs::write(manager.path(), r#"{ "history_limit": 0 }"#).expect("write config");
    let err = manager.load().expect_err("zero limit");
    assert!(matches!(
        err,
        ConfigError::InvalidValue { key: ConfigKey::HistoryLimit, .. }
    ));

    std::fs::write(manager.path(), r#"{ "currency_code": "RUPEE" }"#).expect("write config");
    assert!(manager.load().is_err());

    std::fs::write(manager.path(), r#"{ "history_limit": 3 }"#).expect("write config");
    assert_eq!(manager.load().expect("valid limit").history_limit, 3);
}
