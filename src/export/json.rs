use crate::errors::AppResult;
use crate::export::model::HeatmapExport;
use std::path::Path;

pub fn write_json(path: &Path, doc: &HeatmapExport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, json)?;
    Ok(())
}
