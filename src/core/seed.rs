//! Reference clip seeding from a directory of video files.
//!
//! File names follow `<posture-tokens>_<index>.<ext>`, e.g. `chien_assis_1.mp4`
//! or `chiens a pieds_3.mov`. Filler words are dropped and the remaining tokens
//! joined with underscores before being matched to a posture.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::posture::Posture;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "avi", "mov", "mkv", "webm"];
const FILLER_WORDS: [&str; 2] = ["chien", "chiens"];

static CLIP_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tokens>.+)_(?P<index>\d+)\.(?P<ext>[A-Za-z0-9]+)$")
        .expect("static clip name pattern")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClipName {
    pub posture: Posture,
    pub index: u32,
}

#[derive(Debug, Default, Clone)]
pub struct SeedReport {
    pub inserted: usize,
    pub already_present: usize,
    /// (file name, reason)
    pub skipped: Vec<(String, String)>,
}

pub fn is_video_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|e| VIDEO_EXTENSIONS.contains(&e.as_str()))
}

/// Normalize the posture part of a file name: lowercase, filler words removed,
/// whitespace, dashes and underscores collapsed to single underscores.
pub fn normalize_posture_tokens(raw: &str) -> String {
    raw.to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|t| !t.is_empty() && !FILLER_WORDS.contains(t))
        .collect::<Vec<_>>()
        .join("_")
}

pub fn parse_clip_filename(name: &str) -> AppResult<ParsedClipName> {
    let caps = CLIP_NAME.captures(name).ok_or_else(|| {
        AppError::InvalidArgument(format!(
            "'{name}' does not match <posture>_<index>.<ext>"
        ))
    })?;

    let index: u32 = caps["index"]
        .parse()
        .map_err(|_| AppError::InvalidArgument(format!("'{name}' has an invalid index")))?;

    let tokens = normalize_posture_tokens(&caps["tokens"]);
    if tokens.is_empty() {
        return Err(AppError::InvalidArgument(format!(
            "'{name}' has no posture label"
        )));
    }

    let posture = Posture::from_label(&tokens)?;
    Ok(ParsedClipName { posture, index })
}

pub struct ClipSeeder;

impl ClipSeeder {
    /// Register every well-formed clip in `dir`. Malformed names are logged
    /// and skipped; already registered paths are left untouched.
    pub fn seed_directory(pool: &mut DbPool, dir: &Path) -> AppResult<SeedReport> {
        if !dir.is_dir() {
            return Err(AppError::NotFound(format!(
                "Clip directory {} not found",
                dir.display()
            )));
        }

        let mut names: Vec<String> = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        // stable ids across runs
        names.sort();

        let mut report = SeedReport::default();
        let tx = pool.conn.transaction()?;

        for name in names {
            if !is_video_file(&name) {
                log::debug!("Ignoring non-video file {name}");
                continue;
            }

            let parsed = match parse_clip_filename(&name) {
                Ok(p) => p,
                Err(e) => {
                    log::warn!("Skipping clip file {name}: {e}");
                    report.skipped.push((name, e.to_string()));
                    continue;
                }
            };

            let path = dir.join(&name).to_string_lossy().to_string();
            let description = format!("Reference clip #{} for '{}'", parsed.index, parsed.posture);

            if queries::insert_clip(&tx, parsed.posture, &path, Some(&description))? {
                report.inserted += 1;
            } else {
                report.already_present += 1;
            }
        }

        ttlog(
            &tx,
            "seed",
            &dir.to_string_lossy(),
            &format!(
                "{} inserted, {} already present, {} skipped",
                report.inserted,
                report.already_present,
                report.skipped.len()
            ),
        )?;
        tx.commit()?;

        Ok(report)
    }
}
