#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeZone, Utc};
use rheatmap::core::normalize::{CardConfig, normalize};
use rheatmap::errors::{AppError, AppResult};
use rheatmap::host::HostApi;
use rheatmap::models::state::{EntityState, HistoryRecord};
use std::cell::RefCell;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rhm() -> Command {
    cargo_bin_cmd!("rheatmap")
}

/// Unique config path inside the system temp dir; any previous file is removed.
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rheatmap.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path inside tempdir, removed if present.
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rheatmap_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

pub fn utc(y: i32, m: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, mi, 0).unwrap()
}

/// Normalize a card written as YAML.
pub fn card_config(yaml: &str) -> CardConfig {
    normalize(&serde_yaml::from_str(yaml).unwrap())
}

pub fn record(entity_id: &str, state: &str, at: DateTime<Utc>) -> HistoryRecord {
    HistoryRecord::new(entity_id, state, at)
}

/// In-memory host. `template_output: None` and `history: None` simulate
/// failing endpoints.
#[derive(Default)]
pub struct FakeHost {
    pub states: Vec<EntityState>,
    pub template_output: Option<String>,
    pub history: Option<Vec<Vec<HistoryRecord>>>,
    pub templates_seen: RefCell<Vec<String>>,
    pub history_requests: RefCell<Vec<Vec<String>>>,
}

impl FakeHost {
    pub fn with_history(history: Vec<Vec<HistoryRecord>>) -> Self {
        Self {
            history: Some(history),
            ..Default::default()
        }
    }
}

impl HostApi for FakeHost {
    fn states(&self) -> AppResult<Vec<EntityState>> {
        Ok(self.states.clone())
    }

    fn render_template(&self, template: &str) -> AppResult<String> {
        self.templates_seen.borrow_mut().push(template.to_string());
        self.template_output
            .clone()
            .ok_or_else(|| AppError::Other("template endpoint down".into()))
    }

    fn history(
        &self,
        entity_ids: &[String],
        _start: DateTime<Utc>,
        _end: DateTime<Utc>,
    ) -> AppResult<Vec<Vec<HistoryRecord>>> {
        self.history_requests.borrow_mut().push(entity_ids.to_vec());
        self.history
            .clone()
            .ok_or_else(|| AppError::HostStatus {
                status: 500,
                path: "history/period".into(),
            })
    }
}

pub fn named_state(entity_id: &str, state: &str, friendly: &str) -> EntityState {
    let mut s = EntityState::new(entity_id, state);
    s.attributes
        .insert("friendly_name".into(), serde_json::Value::String(friendly.into()));
    s
}
