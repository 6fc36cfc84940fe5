// src/export/model.rs

use crate::core::card::HeatmapCard;
use crate::core::colors::color_for_count;
use serde::Serialize;

/// Flat record: one (row, day, segment) cell.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct CellExport {
    pub row: String,
    pub date: String,
    pub weekday: String,
    pub segment: String,
    pub segment_id: String,
    pub count: u32,
    pub color: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct SegmentExport {
    pub id: String,
    pub label: String,
    pub start: String,
    pub end: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct RowExport {
    pub name: String,
    pub entity_ids: Vec<String>,
    pub total: u32,
    /// `[day][segment]`, same order as `days` and `segments`.
    pub counts: Vec<Vec<u32>>,
}

/// Whole-card export document.
#[derive(Serialize, Clone, Debug)]
pub struct HeatmapExport {
    pub days: Vec<String>,
    pub segments: Vec<SegmentExport>,
    pub rows: Vec<RowExport>,
    #[serde(skip)]
    cells: Vec<CellExport>,
}

impl HeatmapExport {
    pub fn from_card(card: &HeatmapCard) -> Self {
        let cfg = card.config();
        let days = card.rolling_days();

        let segments = cfg
            .segments
            .iter()
            .map(|s| SegmentExport {
                id: s.id.clone(),
                label: s.display_label.clone(),
                start: crate::utils::format_hhmm(s.start_mins),
                end: crate::utils::format_hhmm(s.end_mins),
            })
            .collect();

        let mut cells = Vec::new();
        let rows = card
            .rows()
            .iter()
            .map(|row| {
                let counts: Vec<Vec<u32>> = (0..days.len())
                    .map(|d| (0..cfg.segments.len()).map(|s| row.grid.get(d, s)).collect())
                    .collect();

                for (d, day) in days.iter().enumerate() {
                    for (s, seg) in cfg.segments.iter().enumerate() {
                        let count = counts[d][s];
                        cells.push(CellExport {
                            row: row.name.clone(),
                            date: day.date.format("%Y-%m-%d").to_string(),
                            weekday: day.label.clone(),
                            segment: seg.display_label.clone(),
                            segment_id: seg.id.clone(),
                            count,
                            color: color_for_count(count, cfg).to_string(),
                        });
                    }
                }

                RowExport {
                    name: row.name.clone(),
                    entity_ids: row.entity_ids.clone(),
                    total: row.grid.total(),
                    counts,
                }
            })
            .collect();

        Self {
            days: days
                .iter()
                .map(|d| d.date.format("%Y-%m-%d").to_string())
                .collect(),
            segments,
            rows,
            cells,
        }
    }

    pub fn cells(&self) -> &[CellExport] {
        &self.cells
    }
}
