//! Configuration file upgrades: fill in keys added by newer releases.

use crate::config::{
    Config, default_busy_timeout_ms, default_clip_count, default_clips_dir,
    default_min_confidence, default_separator_char,
};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry, with their defaults.
fn expected_keys() -> Vec<(&'static str, Value)> {
    vec![
        ("clips_dir", Value::from(default_clips_dir())),
        ("default_clip_count", Value::from(default_clip_count() as u64)),
        ("min_confidence", Value::from(default_min_confidence())),
        ("busy_timeout_ms", Value::from(default_busy_timeout_ms())),
        ("separator_char", Value::from(default_separator_char())),
    ]
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    Ok(yaml.as_mapping().cloned().unwrap_or_default())
}

/// Names of the keys missing from the configuration file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(expected_keys()
        .into_iter()
        .filter(|(k, _)| !map.contains_key(*k))
        .map(|(k, _)| k)
        .collect())
}

/// Add the missing keys with their default values.
///   Returns:
///   Ok(true)  → config updated
///   Ok(false) → no change needed
pub fn migrate_config_file(path: &Path) -> AppResult<bool> {
    let mut map = read_mapping(path)?;
    let mut changed = false;

    for (key, default) in expected_keys() {
        if !map.contains_key(key) {
            info(format!("Adding missing config key '{key}'"));
            map.insert(Value::from(key), default);
            changed = true;
        }
    }

    if !map.contains_key("database") {
        map.insert(
            Value::from("database"),
            Value::from(Config::database_file().to_string_lossy().to_string()),
        );
        changed = true;
    }

    if changed {
        fs::write(path, serde_yaml::to_string(&Value::Mapping(map))?)?;
        success(format!("Configuration updated: {}", path.display()));
    }

    Ok(changed)
}
