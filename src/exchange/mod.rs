//! Tabular export and whole-state import.

mod csv;
mod fs_utils;
mod json;
mod model;
mod xlsx;

pub use csv::{export_clients_csv, export_projects_csv, import_clients_csv};
pub use fs_utils::ensure_writable;
pub use json::{export_projects_json, import_state_json};
pub use xlsx::{export_clients_xlsx, export_projects_xlsx};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
