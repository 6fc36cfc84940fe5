//! Configuration normalizer.
//!
//! Turns a loosely-typed card document (as written by users in YAML) into a
//! fully-defaulted [`CardConfig`]. Never fails: anything missing or of the
//! wrong shape falls back to its default.

use crate::core::scheduler::RefreshMode;
use crate::models::entity::{EntityEntry, TrackedEntity};
use crate::models::segment::{Segment, SegmentStart, close_segments};
use crate::models::threshold::Threshold;
use crate::utils::time::parse_time;
use serde::Serialize;
use serde_yaml::Value;

pub const DEFAULT_ACTIVE_STATES: [&str; 5] = ["on", "open", "unlocked", "home", "active"];
pub const DEFAULT_SEGMENT_STARTS: [&str; 6] = ["00:00", "04:00", "08:00", "12:00", "16:00", "20:00"];
pub const DEFAULT_COLOR_NONE: &str = "#e5e7eb";
pub const DEFAULT_COLOR_OUT_OF_RANGE: &str = "#9ca3af";
pub const COMBINED_ROW_NAME: &str = "Combined Target Group";
/// Ten years of columns; larger windows are capped.
pub const MAX_DAYS_TO_SHOW: u32 = 3650;

const STUB_CONFIG: &str = r##"
entities:
  - entity: ""
    name: ""
target_domain: ""
target_area: ""
target_label: ""
combine_entities: false
refresh_mode: live
refresh_interval: 1
show_footnote: true
active_states: "on, open, unlocked, home, active"
name: ""
show_icon: true
icon: "mdi:view-grid"
icon_color: "var(--success-color)"
days_to_show: 7
shift_overnight: true
entity_space: 24
time_label_width: 85
indicator_width: 36
indicator_height: 36
indicator_gap_x: 6
indicator_gap_y: 6
show_glow: true
indicator_outline_width: 0
indicator_outline_color: "#ffffff"
color_none: "#e5e7eb"
color_out_of_range: "#9ca3af"
show_total: true
segments:
  - { from: "00:00", label: "" }
  - { from: "04:00", label: "" }
  - { from: "08:00", label: "" }
  - { from: "12:00", label: "" }
  - { from: "16:00", label: "" }
  - { from: "20:00", label: "" }
thresholds:
  - { from: 1, to: 4, color: "#a7f3d0" }
  - { from: 5, to: 10, color: "#eab308" }
  - { from: 11, to: 9999, color: "#ef4444" }
"##;

#[derive(Debug, Clone, Serialize)]
pub struct CardConfig {
    pub entities: Vec<TrackedEntity>,
    pub segments: Vec<Segment>,
    pub active_states: Vec<String>,
    pub target_area: String,
    pub target_label: String,
    pub target_domain: String,
    pub combine_entities: bool,
    pub refresh_mode: RefreshMode,
    /// Minutes between live recalculations.
    pub refresh_interval: u32,
    pub show_footnote: bool,
    pub name: String,
    pub show_icon: bool,
    pub icon: String,
    pub icon_color: String,
    pub color_none: String,
    pub color_out_of_range: String,
    pub thresholds: Vec<Threshold>,
    pub days_to_show: u32,
    pub shift_overnight: bool,
    pub entity_space: u32,
    pub time_label_width: u32,
    pub indicator_width: u32,
    pub indicator_height: u32,
    pub indicator_gap_x: u32,
    pub indicator_gap_y: u32,
    pub show_glow: bool,
    pub indicator_outline_width: u32,
    pub indicator_outline_color: String,
    pub show_total: bool,
}

impl Default for CardConfig {
    fn default() -> Self {
        normalize(&Value::Null)
    }
}

impl CardConfig {
    pub fn is_active(&self, state: &str) -> bool {
        self.active_states.iter().any(|s| s == state)
    }

    pub fn has_targets(&self) -> bool {
        !(self.target_area.is_empty()
            && self.target_label.is_empty()
            && self.target_domain.is_empty())
    }

    /// Configured display name for an explicitly listed entity.
    pub fn configured_name(&self, entity_id: &str) -> Option<&str> {
        self.entities
            .iter()
            .find(|e| e.entity_id == entity_id)
            .and_then(TrackedEntity::display_name)
    }
}

/// The document `init` writes: every option spelled out with its default.
pub fn stub_config() -> Value {
    serde_yaml::from_str(STUB_CONFIG).unwrap_or(Value::Null)
}

pub fn normalize(raw: &Value) -> CardConfig {
    let color_out_of_range = get_str(raw, "color_out_of_range", DEFAULT_COLOR_OUT_OF_RANGE);

    CardConfig {
        entities: normalize_entities(raw.get("entities")),
        segments: normalize_segments(raw.get("segments").or_else(|| raw.get("time_blocks"))),
        active_states: normalize_active_states(raw.get("active_states")),
        target_area: get_str(raw, "target_area", ""),
        target_label: get_str(raw, "target_label", ""),
        target_domain: get_str(raw, "target_domain", ""),
        combine_entities: get_bool(raw, "combine_entities", false),
        refresh_mode: raw
            .get("refresh_mode")
            .and_then(Value::as_str)
            .and_then(RefreshMode::from_str_opt)
            .unwrap_or_default(),
        refresh_interval: get_u32(raw, "refresh_interval", 1).max(1),
        show_footnote: get_bool(raw, "show_footnote", true),
        name: get_str(raw, "name", ""),
        show_icon: get_bool(raw, "show_icon", true),
        icon: get_str(raw, "icon", "mdi:view-grid"),
        icon_color: get_str(raw, "icon_color", "var(--success-color)"),
        color_none: get_str(raw, "color_none", DEFAULT_COLOR_NONE),
        thresholds: normalize_thresholds(raw.get("thresholds"), &color_out_of_range),
        color_out_of_range,
        days_to_show: normalize_days(raw),
        shift_overnight: get_bool(raw, "shift_overnight", true),
        entity_space: get_u32(raw, "entity_space", 24),
        time_label_width: get_u32(raw, "time_label_width", 85),
        indicator_width: get_u32(raw, "indicator_width", 36),
        indicator_height: get_u32(raw, "indicator_height", 36),
        indicator_gap_x: get_u32(raw, "indicator_gap_x", 6),
        indicator_gap_y: get_u32(raw, "indicator_gap_y", 6),
        show_glow: get_bool(raw, "show_glow", true),
        indicator_outline_width: get_u32(raw, "indicator_outline_width", 0),
        indicator_outline_color: get_str(raw, "indicator_outline_color", "#ffffff"),
        show_total: get_bool(raw, "show_total", true),
    }
}

fn normalize_days(raw: &Value) -> u32 {
    let days = get_u32(raw, "days_to_show", 7).max(1);
    if days > MAX_DAYS_TO_SHOW {
        log::warn!("days_to_show {days} exceeds {MAX_DAYS_TO_SHOW}, capping");
        return MAX_DAYS_TO_SHOW;
    }
    days
}

fn normalize_entities(v: Option<&Value>) -> Vec<TrackedEntity> {
    let Some(Value::Sequence(items)) = v else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| serde_yaml::from_value::<EntityEntry>(item.clone()).ok())
        .filter_map(EntityEntry::into_tracked)
        .collect()
}

fn normalize_segments(v: Option<&Value>) -> Vec<Segment> {
    let starts: Vec<SegmentStart> = match v {
        Some(Value::Sequence(items)) if !items.is_empty() => items
            .iter()
            .enumerate()
            .map(|(i, item)| segment_start(i, item))
            .collect(),
        _ => DEFAULT_SEGMENT_STARTS
            .iter()
            .enumerate()
            .map(|(i, from)| segment_start(i, &Value::String(from.to_string())))
            .collect(),
    };

    close_segments(starts)
}

fn segment_start(index: usize, item: &Value) -> SegmentStart {
    let (from, label, id) = match item {
        Value::String(s) => (s.clone(), String::new(), None),
        _ => (
            get_str(item, "from", "00:00"),
            get_str(item, "label", ""),
            item.get("_id").and_then(Value::as_str).map(str::to_string),
        ),
    };

    let start_mins = parse_time(&from).unwrap_or_else(|| {
        log::warn!("segment {index}: invalid start time {from:?}, using 00:00");
        0
    });

    SegmentStart {
        id: id.unwrap_or_else(|| format!("seg_{index}")),
        label,
        from,
        start_mins,
    }
}

fn normalize_active_states(v: Option<&Value>) -> Vec<String> {
    let states: Vec<String> = match v {
        Some(Value::String(s)) => s
            .split(',')
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(scalar_to_string)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    };

    if states.is_empty() {
        DEFAULT_ACTIVE_STATES.iter().map(|s| s.to_string()).collect()
    } else {
        states
    }
}

fn normalize_thresholds(v: Option<&Value>, fallback_color: &str) -> Vec<Threshold> {
    let Some(Value::Sequence(items)) = v else {
        return Vec::new();
    };

    items
        .iter()
        .filter(|item| item.is_mapping())
        .map(|item| Threshold {
            from: item.get("from").and_then(value_to_u32).unwrap_or(0),
            to: item.get("to").and_then(value_to_u32),
            color: get_str(item, "color", fallback_color),
        })
        .collect()
}

// ---------------------------
// Fail-soft field readers
// ---------------------------

fn scalar_to_string(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_to_u32(v: &Value) -> Option<u32> {
    match v {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .and_then(|x| u32::try_from(x).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn get_str(raw: &Value, key: &str, default: &str) -> String {
    raw.get(key)
        .and_then(scalar_to_string)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn get_u32(raw: &Value, key: &str, default: u32) -> u32 {
    raw.get(key).and_then(value_to_u32).unwrap_or(default)
}

fn get_bool(raw: &Value, key: &str, default: bool) -> bool {
    match raw.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => match s.trim() {
            "true" => true,
            "false" => false,
            _ => default,
        },
        _ => default,
    }
}
