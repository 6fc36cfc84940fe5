use crate::models::state::{EntityState, StateChange};
use std::collections::HashMap;

/// Point-in-time copy of the host's state registry. Diffing two snapshots
/// yields the change notifications the card reacts to.
#[derive(Debug, Clone, Default)]
pub struct StateSnapshot {
    states: HashMap<String, EntityState>,
}

impl StateSnapshot {
    pub fn new(states: Vec<EntityState>) -> Self {
        Self {
            states: states
                .into_iter()
                .map(|s| (s.entity_id.clone(), s))
                .collect(),
        }
    }

    pub fn get(&self, entity_id: &str) -> Option<&EntityState> {
        self.states.get(entity_id)
    }

    pub fn state_of(&self, entity_id: &str) -> Option<&str> {
        self.get(entity_id).map(|s| s.state.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Changes for the watched entities present in both snapshots whose
    /// state value differs.
    pub fn diff(&self, newer: &StateSnapshot, watched: &[String]) -> Vec<StateChange> {
        watched
            .iter()
            .filter_map(|id| {
                let old = self.state_of(id)?;
                let new = newer.state_of(id)?;
                (old != new).then(|| StateChange {
                    entity_id: id.clone(),
                    old_state: old.to_string(),
                    new_state: new.to_string(),
                })
            })
            .collect()
    }
}
