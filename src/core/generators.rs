//! Deterministic generators behind the config editor helpers: evenly spaced
//! segments and gradient thresholds.

use crate::errors::AppResult;
use crate::models::threshold::Threshold;
use crate::utils::colors::Rgb;
use crate::utils::time::{MINUTES_PER_DAY, format_hhmm};
use serde::Serialize;

pub const DEFAULT_SEGMENT_COUNT: u32 = 4;
pub const DEFAULT_GRADIENT_STEPS: u32 = 5;
pub const DEFAULT_GRADIENT_MIN: u32 = 1;
pub const DEFAULT_GRADIENT_MAX: u32 = 50;
pub const DEFAULT_GRADIENT_FROM: &str = "#00ff00";
pub const DEFAULT_GRADIENT_TO: &str = "#ff0000";
/// Upper bound written for the last generated threshold.
pub const OPEN_UPPER_BOUND: u32 = 9999;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentSpec {
    pub from: String,
    pub label: String,
}

/// Split the day into `count` equal segments (0 means the default of 4).
pub fn even_segments(count: u32) -> Vec<SegmentSpec> {
    let count = if count == 0 { DEFAULT_SEGMENT_COUNT } else { count };
    let step = f64::from(MINUTES_PER_DAY) / f64::from(count);

    (0..count)
        .map(|i| {
            let mins = (f64::from(i) * step).round() as u32;
            SegmentSpec {
                from: format_hhmm(mins),
                label: String::new(),
            }
        })
        .collect()
}

/// `steps` contiguous thresholds spanning `[min, max]`, colored by linear
/// interpolation from `from_color` to `to_color`. The last range is open.
pub fn gradient_thresholds(
    steps: u32,
    min: u32,
    max: u32,
    from_color: &str,
    to_color: &str,
) -> AppResult<Vec<Threshold>> {
    let steps = if steps == 0 { DEFAULT_GRADIENT_STEPS } else { steps };
    let c1 = Rgb::parse(from_color)?;
    let c2 = Rgb::parse(to_color)?;

    let min_f = f64::from(min);
    let val_step = (f64::from(max) - min_f) / f64::from(steps.saturating_sub(1).max(1));

    let out = (0..steps)
        .map(|i| {
            let i_f = f64::from(i);
            let from = (min_f + i_f * val_step).round().max(0.0) as u32;
            let to = if i == steps - 1 {
                OPEN_UPPER_BOUND
            } else {
                ((min_f + (i_f + 1.0) * val_step).round() as i64 - 1).max(0) as u32
            };
            let factor = if steps <= 1 {
                0.0
            } else {
                i_f / f64::from(steps - 1)
            };

            Threshold::new(from, Some(to), c1.interpolate(c2, factor).to_hex())
        })
        .collect();

    Ok(out)
}
