//! Interactive confirmation before overwriting files.

use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::io::{self, Write};
use std::path::Path;

/// True when `path` may be written: it does not exist, `force` is set,
/// or the user answered yes on stdin.
pub fn confirm_overwrite(path: &Path, force: bool) -> AppResult<bool> {
    if force || !path.exists() {
        return Ok(true);
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
