//! Maps the card's pixel-based layout options onto terminal cells.

use crate::core::normalize::CardConfig;

/// Approximate width of one terminal column, in CSS pixels.
const CHAR_PX: u32 = 8;
/// Approximate height of one terminal line, in CSS pixels.
const LINE_PX: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridStyle {
    pub label_cols: usize,
    pub cell_cols: usize,
    pub cell_lines: usize,
    pub gap_cols: usize,
    pub gap_lines: usize,
    pub entity_gap_lines: usize,
    pub outlined: bool,
}

/// Upper bounds for pixel-derived sizes.
pub const MAX_COLS: usize = 40;
pub const MAX_LINES: usize = 8;

fn cols(px: u32) -> usize {
    let n = px.saturating_add(CHAR_PX / 2) / CHAR_PX;
    (n as usize).min(MAX_COLS)
}

fn lines(px: u32) -> usize {
    let n = px.saturating_add(LINE_PX / 2) / LINE_PX;
    (n as usize).min(MAX_LINES)
}

impl GridStyle {
    /// `longest_label` widens the label column so segment labels never get
    /// cut.
    pub fn from_config(cfg: &CardConfig, longest_label: usize) -> Self {
        let outlined = cfg.indicator_outline_width > 0;
        let min_cell = if outlined { 5 } else { 3 };

        Self {
            label_cols: cols(cfg.time_label_width).max(longest_label),
            cell_cols: cols(cfg.indicator_width).max(min_cell),
            cell_lines: lines(cfg.indicator_height).max(1),
            gap_cols: cols(cfg.indicator_gap_x),
            gap_lines: lines(cfg.indicator_gap_y),
            entity_gap_lines: lines(cfg.entity_space),
            outlined,
        }
    }
}
