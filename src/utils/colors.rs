//! Color helpers: hex parsing/formatting and linear RGB interpolation.

use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Accepts `#rgb` and `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let s = hex.trim().trim_start_matches('#');
        let full: String = match s.len() {
            3 => s.chars().flat_map(|c| [c, c]).collect(),
            6 => s.to_string(),
            _ => return None,
        };
        let v = u32::from_str_radix(&full, 16).ok()?;
        Some(Rgb(
            ((v >> 16) & 0xff) as u8,
            ((v >> 8) & 0xff) as u8,
            (v & 0xff) as u8,
        ))
    }

    pub fn parse(hex: &str) -> AppResult<Self> {
        Self::from_hex(hex).ok_or_else(|| AppError::InvalidColor(hex.to_string()))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Channel-wise `a + factor * (b - a)`, rounded.
    pub fn interpolate(self, other: Rgb, factor: f64) -> Rgb {
        let lerp = |a: u8, b: u8| -> u8 {
            let v = a as f64 + factor * (b as f64 - a as f64);
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            lerp(self.0, other.0),
            lerp(self.1, other.1),
            lerp(self.2, other.2),
        )
    }
}
