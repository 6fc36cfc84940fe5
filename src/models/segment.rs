use crate::utils::time::{MINUTES_PER_DAY, format_mins};
use serde::Serialize;

/// A time-of-day bucket. `end_mins` is inclusive and may be lower than
/// `start_mins` when the segment runs past midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub id: String,
    pub label: String,
    pub from: String,
    pub start_mins: u32,
    pub end_mins: u32,
    pub display_label: String,
}

impl Segment {
    pub fn wraps(&self) -> bool {
        self.start_mins > self.end_mins
    }

    pub fn contains(&self, minute: u32) -> bool {
        if self.wraps() {
            minute >= self.start_mins || minute <= self.end_mins
        } else {
            minute >= self.start_mins && minute <= self.end_mins
        }
    }

    /// True for the after-midnight tail of a wrapping segment.
    pub fn is_post_midnight(&self, minute: u32) -> bool {
        self.wraps() && minute <= self.end_mins
    }

    pub fn length_minutes(&self) -> u32 {
        if self.wraps() {
            MINUTES_PER_DAY - self.start_mins + self.end_mins + 1
        } else {
            self.end_mins - self.start_mins + 1
        }
    }
}

/// Seed for [`close_segments`]: id, label, raw `from` string and its minutes.
#[derive(Debug, Clone)]
pub struct SegmentStart {
    pub id: String,
    pub label: String,
    pub from: String,
    pub start_mins: u32,
}

/// Sort by start, collapse duplicate starts (first declared wins) and close
/// each range one minute before the next start. The last segment wraps to
/// one minute before the first, so the result always covers the full day.
pub fn close_segments(mut starts: Vec<SegmentStart>) -> Vec<Segment> {
    starts.sort_by_key(|s| s.start_mins);
    starts.dedup_by_key(|s| s.start_mins);

    let n = starts.len();
    let first_start = starts.first().map(|s| s.start_mins).unwrap_or(0);

    starts
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let next_start = if i + 1 < n {
                starts[i + 1].start_mins
            } else {
                first_start
            };
            let end_mins = (next_start + MINUTES_PER_DAY - 1) % MINUTES_PER_DAY;

            let display_label = if s.label.trim().is_empty() {
                format!("{} - {}", format_mins(s.start_mins), format_mins(end_mins))
            } else {
                s.label.clone()
            };

            Segment {
                id: s.id.clone(),
                label: s.label.clone(),
                from: s.from.clone(),
                start_mins: s.start_mins,
                end_mins,
                display_label,
            }
        })
        .collect()
}
