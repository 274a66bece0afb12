//! Config Tuning Tests
//!
//! A harness config file tunes the catalog for backends with different
//! fixtures and key types.

use crate::common::*;
use tempfile::TempDir;

fn catalog_from(toml: &str) -> RuleInputCatalog {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, toml).unwrap();
    RuleInputCatalog::from_config(&HarnessConfig::from_file(&path).unwrap())
}

#[test]
fn default_config_file_matches_default_catalog() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    HarnessConfig::write_default_if_missing(&path).unwrap();

    let config = HarnessConfig::from_file(&path).unwrap();
    assert_eq!(config, HarnessConfig::default());
    assert_eq!(config.datetime_valid_default, DEFAULT_DATETIME);
    assert_eq!(config.missing_foreign_key, DEFAULT_MISSING_FOREIGN_KEY);
}

#[test]
fn disabling_the_alphanumeric_probe_drops_one_input() {
    init_tracing();
    let catalog = catalog_from("alphanumeric_foreign_key_probe = false\n");
    let mut model = blog_post();
    let mut recorder = CollectingRecorder::new();

    let report = ValidationHarness::with_catalog(&mut model, &mut recorder, catalog)
        .test_valid_foreign_key(
            "user_id",
            USER_ID_EXISTS,
            CheckOptions::default().with_valid(InputOverride::of(EXISTING_USERS)),
        )
        .unwrap();

    assert_eq!(report.invalid_checked, 5);
    recorder.assert_clean();
}

#[test]
fn missing_key_must_really_be_missing() {
    init_tracing();
    // Key 2 exists in the fixture, so the model accepts the supposedly missing key
    let catalog = catalog_from("missing_foreign_key = 2\n");
    let mut model = blog_post();
    let mut recorder = CollectingRecorder::new();

    let report = ValidationHarness::with_catalog(&mut model, &mut recorder, catalog)
        .test_valid_foreign_key("user_id", USER_ID_EXISTS, CheckOptions::default())
        .unwrap();

    assert_eq!(report.failed, 1);
    assert!(recorder.failures()[0]
        .diagnostic
        .contains("seemingly INVALID input\n2 (Int)\n"));
}

#[test]
fn missing_key_reconciles_with_existing_keys() {
    init_tracing();
    let catalog = catalog_from("missing_foreign_key = 2\n");
    let mut model = blog_post();
    let mut recorder = CollectingRecorder::new();

    // Declaring 2 valid pulls it out of the invalid side
    let report = ValidationHarness::with_catalog(&mut model, &mut recorder, catalog)
        .test_valid_foreign_key(
            "user_id",
            USER_ID_EXISTS,
            CheckOptions::default().with_valid(InputOverride::of(EXISTING_USERS)),
        )
        .unwrap();

    assert_eq!(report.invalid_checked, 5);
    recorder.assert_clean();
}

#[test]
fn datetime_default_follows_config() {
    init_tracing();
    let catalog = catalog_from("datetime_valid_default = \"1999-12-31 23:59:59\"\n");
    assert_eq!(
        catalog.default_valid_inputs(&RuleSpec::DateTime),
        vec![Value::from("1999-12-31 23:59:59")]
    );

    let mut model = access_log();
    let mut recorder = CollectingRecorder::new();
    ValidationHarness::with_catalog(&mut model, &mut recorder, catalog)
        .test_datetime("logged_at", LOGGED_AT_DATETIME, CheckOptions::default())
        .unwrap();

    recorder.assert_clean();
}

#[test]
fn malformed_config_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "missing_foreign_key = \"many\"\n").unwrap();

    let err = HarnessConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}
