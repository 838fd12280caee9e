// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
pub mod markdown;
mod model;

pub use logic::ExportLogic;
pub use markdown::MarkdownTable;
pub use model::TableRecord;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for file exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// GitHub-flavoured markdown table
    #[default]
    #[value(alias = "markdown")]
    Md,
    Csv,
    Json,
}
