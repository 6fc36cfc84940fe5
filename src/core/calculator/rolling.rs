use crate::models::day::RollingDay;
use crate::utils::date::weekday_label;
use chrono::{DateTime, Duration, NaiveDate, Utc};

/// `n` consecutive days ending at `today`, oldest first.
pub fn rolling_days(today: NaiveDate, n: u32) -> Vec<RollingDay> {
    (0..n)
        .rev()
        .filter_map(|back| today.checked_sub_signed(Duration::days(i64::from(back))))
        .map(|date| RollingDay {
            label: weekday_label(&date),
            date,
        })
        .collect()
}

/// Column index of `date` in the window, if it falls inside it.
pub fn day_index(days: &[RollingDay], date: NaiveDate) -> Option<usize> {
    days.iter().position(|d| d.date == date)
}

/// Earliest instant of a `days`-long window ending at `now`. Saturates at
/// the start of chrono's range instead of overflowing.
pub fn window_start(now: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    Duration::try_days(i64::from(days))
        .and_then(|span| now.checked_sub_signed(span))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
