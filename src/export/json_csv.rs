use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: Serialize>(items: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(items)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header row included via serde).
pub(crate) fn export_csv<T: Serialize>(items: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in items {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
