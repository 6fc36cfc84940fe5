//! Color mapper: count → display color.

use crate::core::normalize::CardConfig;
use crate::models::threshold::Threshold;

/// Zero always maps to `none`; otherwise the first threshold containing the
/// count wins, and a positive count outside every threshold maps to
/// `out_of_range`.
pub fn color_for<'a>(
    count: u32,
    thresholds: &'a [Threshold],
    none: &'a str,
    out_of_range: &'a str,
) -> &'a str {
    if count == 0 {
        return none;
    }
    thresholds
        .iter()
        .find(|t| t.matches(count))
        .map(|t| t.color.as_str())
        .unwrap_or(out_of_range)
}

pub fn color_for_count(count: u32, cfg: &CardConfig) -> &str {
    color_for(
        count,
        &cfg.thresholds,
        &cfg.color_none,
        &cfg.color_out_of_range,
    )
}
