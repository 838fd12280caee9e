// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: Serialize>(
    label: &str,
    records: &[T],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;

    notify_export_success(label, path);
    Ok(())
}

/// Export CSV (header derived from the serde field names).
pub(crate) fn export_csv<T: Serialize>(
    label: &str,
    records: &[T],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(records, file)?;

    notify_export_success(label, path);
    Ok(())
}

pub(crate) fn write_csv<T: Serialize, W: Write>(records: &[T], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);

    for item in records {
        wtr.serialize(item)?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn print_json<T: Serialize>(records: &[T]) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(records)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json_data}")?;
    Ok(())
}
