//! Raw ANSI escapes for table cells and status lines.

pub const RESET: &str = "\x1b[0m";
pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// `text` wrapped in `color` and a reset.
pub fn paint(color: &str, text: impl std::fmt::Display) -> String {
    format!("{color}{text}{RESET}")
}

/// GREY for missing values (None, blank or "--"), plain otherwise.
pub fn color_for_optional_field<T: AsRef<str>>(value: Option<T>) -> &'static str {
    match value {
        Some(v) if !v.as_ref().trim().is_empty() && v.as_ref() != "--" => RESET,
        _ => GREY,
    }
}

pub fn color_for_outcome(success: bool) -> &'static str {
    if success { GREEN } else { RED }
}

/// Validated sessions in green, open ones in yellow.
pub fn color_for_validated(validated: bool) -> &'static str {
    if validated { GREEN } else { YELLOW }
}
