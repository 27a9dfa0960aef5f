//! Machine-readable output for the `--json` flag.

use crate::errors::AppResult;
use serde::Serialize;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
