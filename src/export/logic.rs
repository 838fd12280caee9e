// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json, print_json, write_csv};
use crate::export::markdown::MarkdownTable;
use crate::export::{ExportFormat, TableRecord, notify_export_success};
use crate::ui::messages::{info, warning};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// High-level output dispatch shared by every command.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` in `format` to `output`, or to stdout when `output` is None.
    ///
    /// `label` names the table in console messages ("Schedule", "Calendar", ...).
    pub fn write<T: TableRecord + Serialize>(
        label: &str,
        records: &[T],
        format: ExportFormat,
        output: Option<&Path>,
        force: bool,
    ) -> AppResult<()> {
        if records.is_empty() {
            warning(format!("{label}: nothing to write."));
        }

        let Some(path) = output else {
            return Self::print(records, format);
        };

        ensure_writable(path, force)?;
        ensure_parent(path)?;

        match format {
            ExportFormat::Md => export_markdown(label, records, path),
            ExportFormat::Csv => export_csv(label, records, path),
            ExportFormat::Json => export_json(label, records, path),
        }
    }

    fn print<T: TableRecord + Serialize>(records: &[T], format: ExportFormat) -> AppResult<()> {
        match format {
            ExportFormat::Md => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(MarkdownTable::from_records(records).render().as_bytes())?;
                Ok(())
            }
            ExportFormat::Csv => write_csv(records, io::stdout().lock()),
            ExportFormat::Json => print_json(records),
        }
    }
}

fn export_markdown<T: TableRecord>(label: &str, records: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to Markdown: {}", path.display()));

    fs::write(path, MarkdownTable::from_records(records).render())?;

    notify_export_success(label, path);
    Ok(())
}
