// src/export/mod.rs

mod csv;
mod fs_utils;
mod json;
pub mod model;

pub use model::{CellExport, HeatmapExport};

use crate::core::card::HeatmapCard;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write the card's current grids to `path`.
pub fn export_card(
    card: &HeatmapCard,
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    let doc = HeatmapExport::from_card(card);
    match format {
        ExportFormat::Csv => csv::write_csv(path, &doc.cells())?,
        ExportFormat::Json => json::write_json(path, &doc)?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        path.display()
    ));
    Ok(())
}
