use crate::errors::{AppError, AppResult};
use crate::export::{AttemptExport, ExportFormat};
use crate::ui::messages::{info, success};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `rows` to `path` in `format`, replacing any existing file.
pub(crate) fn write_rows(format: ExportFormat, rows: &[AttemptExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to {}: {}", format.label(), path.display()));

    match format {
        ExportFormat::Csv => write_csv(rows, path)?,
        ExportFormat::Json => write_json(rows, path)?,
    }

    success(format!(
        "{} export completed: {} ({} rows)",
        format.label(),
        path.display(),
        rows.len()
    ));
    Ok(())
}

fn write_json(rows: &[AttemptExport], path: &Path) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    out.flush()?;
    Ok(())
}

// header row comes from the serde field names
fn write_csv(rows: &[AttemptExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
