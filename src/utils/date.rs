use chrono::{DateTime, NaiveDate, TimeZone};

/// Short weekday label used in the heatmap header (`Mon`, `Tue`, ...).
pub fn weekday_label(d: &NaiveDate) -> String {
    d.format("%a").to_string()
}

/// Human "as of" stamp shown for static snapshots.
pub fn as_of_label<Tz: TimeZone>(t: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    t.format("%H:%M on %Y-%m-%d").to_string()
}
