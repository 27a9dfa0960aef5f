use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_fields};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Effective configuration (file values plus command-line overrides) as YAML.
    pub fn render(cfg: &Config) -> AppResult<String> {
        Ok(serde_yaml::to_string(cfg)?)
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = Self::default_editor();
        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&requested).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{requested}'"
                ));
                return Ok(());
            }
            _ if requested == default_editor => {
                return Err(AppError::Config(format!(
                    "Failed to edit configuration file using '{requested}'"
                )));
            }
            _ => warning(format!(
                "Editor '{requested}' not available, falling back to '{default_editor}'"
            )),
        }

        let status = Command::new(&default_editor)
            .arg(path)
            .status()
            .map_err(|e| AppError::Config(e.to_string()))?;
        if !status.success() {
            return Err(AppError::Config(format!(
                "Failed to edit configuration file using fallback '{default_editor}'"
            )));
        }
        success(format!(
            "Configuration file edited successfully using fallback '{default_editor}'"
        ));
        Ok(())
    }

    /// Report missing keys. Returns true when the file is complete.
    pub fn check(path: &Path) -> AppResult<bool> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Configuration file {} not found (run `init` first)",
                path.display()
            )));
        }

        let missing = missing_fields(path)?;
        if missing.is_empty() {
            success("Configuration file is complete.");
            Ok(true)
        } else {
            for key in &missing {
                warning(format!("Missing key: {key}"));
            }
            info("Run `config --migrate` to add the defaults.");
            Ok(false)
        }
    }

    pub fn migrate(path: &Path) -> AppResult<bool> {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Configuration file {} not found (run `init` first)",
                path.display()
            )));
        }

        let changed = migrate_config_file(path)?;
        if !changed {
            info("Configuration already up to date.");
        }
        Ok(changed)
    }
}
