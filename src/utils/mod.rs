pub mod colors;
pub mod date;
pub mod formatting;
pub mod time;

pub use formatting::pad_display;
pub use time::{format_hhmm, format_mins, parse_time};
