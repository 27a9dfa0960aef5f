//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}

/// Progress towards the validation threshold, e.g. `[■■■□] 3/4`.
pub fn progress(done: i64, target: i64) -> String {
    let filled = done.clamp(0, target) as usize;
    let empty = (target as usize).saturating_sub(filled);
    format!("[{}{}] {}/{}", "■".repeat(filled), "□".repeat(empty), done, target)
}

pub fn join_ids(ids: &[i64]) -> String {
    if ids.is_empty() {
        return "--".to_string();
    }
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
