use crate::errors::AppResult;
use crate::export::model::CellExport;
use csv::Writer;
use std::path::Path;

/// Write one CSV record per heatmap cell.
pub fn write_csv(path: &Path, cells: &[CellExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for cell in cells {
        wtr.serialize(cell)?;
    }
    wtr.flush()?;
    Ok(())
}
