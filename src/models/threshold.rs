use serde::{Deserialize, Serialize};

/// Count range `[from, to]` mapped to a color. `to = None` is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    #[serde(default)]
    pub from: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<u32>,
    pub color: String,
}

impl Threshold {
    pub fn new(from: u32, to: Option<u32>, color: impl Into<String>) -> Self {
        Self {
            from,
            to,
            color: color.into(),
        }
    }

    pub fn matches(&self, count: u32) -> bool {
        count >= self.from && self.to.is_none_or(|to| count <= to)
    }
}
