use chrono::NaiveDate;
use serde::Serialize;

/// One column of the heatmap: a local calendar date and its weekday label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollingDay {
    pub date: NaiveDate,
    pub label: String,
}
