//! Time utilities: parsing HH:MM into minutes since midnight and formatting
//! minutes back for labels and generated configuration.

use chrono::{DateTime, TimeZone, Timelike};
use regex::Regex;
use std::sync::LazyLock;

pub const MINUTES_PER_DAY: u32 = 1440;

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,2})(?::(\d{1,2}))?\s*$").expect("static regex")
});

/// Parse `H`, `H:MM` or `HH:MM` into minutes since midnight.
pub fn parse_time(t: &str) -> Option<u32> {
    let caps = TIME_RE.captures(t)?;
    let h: u32 = caps.get(1)?.as_str().parse().ok()?;
    let m: u32 = caps
        .get(2)
        .map(|m| m.as_str().parse().ok())
        .unwrap_or(Some(0))?;

    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// 12-hour label: `12am`, `4pm`, `4:30pm`.
pub fn format_mins(mins: u32) -> String {
    let h = (mins / 60) % 24;
    let m = mins % 60;
    let ampm = if h >= 12 { "pm" } else { "am" };
    let h12 = match h % 12 {
        0 => 12,
        x => x,
    };

    if m == 0 {
        format!("{h12}{ampm}")
    } else {
        format!("{h12}:{m:02}{ampm}")
    }
}

/// 24-hour `HH:MM`.
pub fn format_hhmm(mins: u32) -> String {
    format!("{:02}:{:02}", (mins / 60) % 24, mins % 60)
}

/// Local minute of day for a timestamp.
pub fn minute_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> u32 {
    t.hour() * 60 + t.minute()
}
