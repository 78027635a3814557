use super::{apply_env, apply_file, Settings};

use std::{collections::HashMap, fs};

use shared::domain::{Concentration, Flavor, Roast};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn missing_file_keeps_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut settings = Settings::default();
    apply_file(&mut settings, &dir.path().join("server.toml")).expect("missing file is fine");
    assert_eq!(settings, Settings::default());
}

#[test]
fn file_overrides_bind_and_preferences() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("server.toml");
    fs::write(
        &path,
        "bind_addr = \"0.0.0.0:9000\"\nlog_filter = \"warn\"\ndefault_flavor = \"sweet\"\ndefault_roast = \"dark\"\n",
    )
    .expect("write");

    let mut settings = Settings::default();
    let issues = apply_file(&mut settings, &path).expect("apply");

    assert!(issues.is_empty());
    assert_eq!(settings.server_bind, "0.0.0.0:9000");
    assert_eq!(settings.log_filter, "warn");
    assert_eq!(settings.default_preferences.flavor, Flavor::Sweet);
    assert_eq!(settings.default_preferences.concentration, Concentration::Medium);
    assert_eq!(settings.default_roast, Roast::Dark);
}

#[test]
fn malformed_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("server.toml");
    fs::write(&path, "bind_addr = [").expect("write");

    let mut settings = Settings::default();
    let err = apply_file(&mut settings, &path).expect_err("should fail");
    assert!(format!("{err:#}").contains("failed to parse"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn env_wins_and_app_prefix_takes_precedence() {
    let mut settings = Settings::default();
    apply_env(
        &mut settings,
        env(&[
            ("SERVER_BIND", "127.0.0.1:1"),
            ("APP__BIND_ADDR", "127.0.0.1:2"),
            ("APP__DEFAULT_CONCENTRATION", "strong"),
        ]),
    );
    assert_eq!(settings.server_bind, "127.0.0.1:2");
    assert_eq!(settings.default_preferences.concentration, Concentration::Strong);
}

#[test]
fn invalid_env_preference_is_ignored() {
    let mut settings = Settings::default();
    let issues = apply_env(&mut settings, env(&[("APP__DEFAULT_FLAVOR", "smoky")]));
    assert_eq!(settings.default_preferences.flavor, Flavor::Standard);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("APP__DEFAULT_FLAVOR"));
}

#[test]
fn log_filter_comes_from_env() {
    let mut settings = Settings::default();
    assert_eq!(settings.log_filter, "info");

    let issues = apply_env(&mut settings, env(&[("APP__LOG_FILTER", "debug")]));
    assert!(issues.is_empty());
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn invalid_file_preference_is_reported_not_applied() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("server.toml");
    fs::write(&path, "default_roast = \"charcoal\"\n").expect("write");

    let mut settings = Settings::default();
    let issues = apply_file(&mut settings, &path).expect("apply");
    assert_eq!(settings.default_roast, Roast::Light);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("default_roast"));
}
