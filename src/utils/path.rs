//! Path helpers for user supplied locations.

use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// `~/clips` → `$HOME/clips`; anything else is returned unchanged.
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

/// Output files are only written to absolute locations.
pub fn require_absolute(path: &str) -> AppResult<&Path> {
    let p = Path::new(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Err(AppError::InvalidArgument(format!(
            "Output file path must be absolute: {path}"
        )))
    }
}
