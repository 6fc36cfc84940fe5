use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Current state of one entity as exposed by the host's state registry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityState {
    pub entity_id: String,
    pub state: String,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

impl EntityState {
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: Map::new(),
        }
    }

    pub fn friendly_name(&self) -> Option<&str> {
        self.attributes
            .get("friendly_name")
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}

/// One historical state record. Only the first record of a sequence is
/// guaranteed to carry the entity id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub entity_id: Option<String>,
    pub state: String,
    pub last_changed: DateTime<Utc>,
}

impl HistoryRecord {
    pub fn new(entity_id: &str, state: &str, last_changed: DateTime<Utc>) -> Self {
        Self {
            entity_id: Some(entity_id.to_string()),
            state: state.to_string(),
            last_changed,
        }
    }
}

/// Before/after snapshot for one watched entity.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    pub entity_id: String,
    pub old_state: String,
    pub new_state: String,
}
