//! Classification of event timestamps into (day, segment) buckets.

use crate::models::segment::Segment;
use crate::utils::time::minute_of_day;
use chrono::{DateTime, NaiveDate, TimeZone};

/// Bucket an event falls in: its attributed local date and segment index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    pub date: NaiveDate,
    pub segment: usize,
}

/// First segment whose range contains `minute`.
pub fn find_segment(segments: &[Segment], minute: u32) -> Option<usize> {
    segments.iter().position(|s| s.contains(minute))
}

/// Classify a timestamp (already in the display timezone).
///
/// Events in the post-midnight tail of a wrapping segment are attributed to
/// the previous day when `shift_overnight` is on, so a 22:00-01:59 segment
/// counts a 00:30 event under the evening it started.
pub fn classify<Tz: TimeZone>(
    at: &DateTime<Tz>,
    segments: &[Segment],
    shift_overnight: bool,
) -> Option<Bucket> {
    let minute = minute_of_day(at);
    let segment = find_segment(segments, minute)?;
    let date = at.date_naive();

    let date = if shift_overnight && segments[segment].is_post_midnight(minute) {
        date.pred_opt()?
    } else {
        date
    };

    Some(Bucket { date, segment })
}
