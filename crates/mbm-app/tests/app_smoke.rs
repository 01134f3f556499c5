//! Smoke test for the mbm-app service layer.

use std::path::PathBuf;

use mbm_app::{AppError, Catalog, calculate, load_catalog, operation_table};
use mbm_core::{Operator, Outcome, Value};

fn unique_temp_file(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("mbm_app_{}_{}", std::process::id(), name));
    path
}

#[test]
fn builtin_menu_without_config() {
    let catalog = load_catalog(None).expect("built-in menu");
    assert_eq!(catalog, Catalog::default());

    let calc = calculate(&catalog, "0m (Measured Zero)", "/", "0m (Measured Zero)").unwrap();
    assert_eq!(calc.outcome, Outcome::Value(Value::TransientOne));
    assert_eq!(calc.to_string(), "0m / 0m = 1t");
}

#[test]
fn loads_menu_from_yaml_file() {
    let path = unique_temp_file("menu.yaml");
    std::fs::write(
        &path,
        "version: 1\noperands:\n  - label: ten\n    value: \"10\"\n  - label: quarter\n    value: \"0.25\"\n  - label: absolute\n    value: 0bm\n",
    )
    .unwrap();

    let catalog = load_catalog(Some(&path)).expect("menu should load");
    let _ = std::fs::remove_file(&path);

    assert_eq!(catalog.len(), 3);
    let calc = calculate(&catalog, "ten", "×", "quarter").unwrap();
    assert_eq!(calc.to_string(), "10 × 0.25 = 2.5");

    let table = operation_table(&catalog, Operator::Multiply);
    assert_eq!(table.get(2, 0), Some(Outcome::Value(Value::AbsoluteZero)));
}

#[test]
fn missing_config_file_reports_path() {
    let path = unique_temp_file("does_not_exist.yaml");
    let err = load_catalog(Some(&path)).unwrap_err();
    match err {
        AppError::ConfigFileRead { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn malformed_config_is_a_parse_error() {
    let path = unique_temp_file("broken.yaml");
    std::fs::write(&path, "version: [not a number\n").unwrap();

    let err = load_catalog(Some(&path)).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(matches!(err, AppError::ConfigParse { .. }));
}
