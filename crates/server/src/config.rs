use std::{collections::HashMap, fs, io, path::Path, str::FromStr};

use anyhow::Context;
use shared::domain::{Concentration, Flavor, PourPreferences, Roast};

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub server_bind: String,
    pub log_filter: String,
    pub default_preferences: PourPreferences,
    pub default_roast: Roast,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            log_filter: "info".into(),
            default_preferences: PourPreferences::default(),
            default_roast: Roast::default(),
        }
    }
}

/// Loads settings before logging exists, so problems come back as messages
/// for the caller to log once the subscriber is installed.
pub fn load_settings() -> (Settings, Vec<String>) {
    let mut settings = Settings::default();
    let mut issues = Vec::new();

    match apply_file(&mut settings, Path::new(SETTINGS_FILE)) {
        Ok(found) => issues.extend(found),
        Err(error) => issues.push(format!("ignoring {SETTINGS_FILE}: {error:#}")),
    }
    issues.extend(apply_env(&mut settings, |key| std::env::var(key).ok()));

    (settings, issues)
}

/// Overlays `bind_addr`, `log_filter`, `default_flavor`,
/// `default_concentration` and `default_roast` from a flat TOML file.
/// A missing file is not an error; rejected preference values are returned.
pub fn apply_file(settings: &mut Settings, path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(error) => {
            return Err(error).with_context(|| format!("failed to read '{}'", path.display()))
        }
    };
    let file_cfg = toml::from_str::<HashMap<String, String>>(&raw)
        .with_context(|| format!("failed to parse '{}'", path.display()))?;

    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("log_filter") {
        settings.log_filter = v.clone();
    }

    let issues = [
        overlay(
            &mut settings.default_preferences.flavor,
            "default_flavor",
            file_cfg.get("default_flavor"),
        ),
        overlay(
            &mut settings.default_preferences.concentration,
            "default_concentration",
            file_cfg.get("default_concentration"),
        ),
        overlay(
            &mut settings.default_roast,
            "default_roast",
            file_cfg.get("default_roast"),
        ),
    ];
    Ok(issues.into_iter().flatten().collect())
}

pub fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) -> Vec<String> {
    if let Some(v) = var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }
    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    let issues = [
        overlay::<Flavor>(
            &mut settings.default_preferences.flavor,
            "APP__DEFAULT_FLAVOR",
            var("APP__DEFAULT_FLAVOR").as_ref(),
        ),
        overlay::<Concentration>(
            &mut settings.default_preferences.concentration,
            "APP__DEFAULT_CONCENTRATION",
            var("APP__DEFAULT_CONCENTRATION").as_ref(),
        ),
        overlay::<Roast>(
            &mut settings.default_roast,
            "APP__DEFAULT_ROAST",
            var("APP__DEFAULT_ROAST").as_ref(),
        ),
    ];
    issues.into_iter().flatten().collect()
}

fn overlay<T>(target: &mut T, key: &str, raw: Option<&String>) -> Option<String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw?.parse::<T>() {
        Ok(value) => {
            *target = value;
            None
        }
        Err(error) => Some(format!("keeping default for {key}: {error}")),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
