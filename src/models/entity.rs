use serde::{Deserialize, Serialize};

/// A configured entity entry as written by users: either a bare id or a
/// map with an optional display name.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EntityEntry {
    Id(String),
    Full {
        #[serde(default)]
        entity: String,
        #[serde(default)]
        name: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedEntity {
    pub entity_id: String,
    pub name: Option<String>,
}

impl TrackedEntity {
    pub fn new(entity_id: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            name: None,
        }
    }

    pub fn named(entity_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            name: Some(name.into()),
        }
    }

    /// Configured display name, ignoring blanks.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.trim().is_empty())
    }
}

impl EntityEntry {
    /// Normalize into a tracked entity; blank ids yield `None`.
    pub fn into_tracked(self) -> Option<TrackedEntity> {
        let (id, name) = match self {
            EntityEntry::Id(id) => (id, None),
            EntityEntry::Full { entity, name } => (entity, name),
        };
        let id = id.trim().to_string();
        if id.is_empty() {
            return None;
        }
        Some(TrackedEntity {
            entity_id: id,
            name: name.filter(|n| !n.trim().is_empty()),
        })
    }
}
