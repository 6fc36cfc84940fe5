//! Boundary with the Home Assistant host.
//!
//! Everything the card needs from the outside world goes through
//! [`HostApi`]: the state registry, template rendering and the history
//! endpoint. [`client::HassClient`] talks to a real instance over REST;
//! tests plug in their own implementation.

pub mod client;
pub mod snapshot;

use crate::errors::AppResult;
use crate::models::state::{EntityState, HistoryRecord};
use chrono::{DateTime, Utc};

pub use client::HassClient;
pub use snapshot::StateSnapshot;

pub trait HostApi {
    /// Current state of every entity.
    fn states(&self) -> AppResult<Vec<EntityState>>;

    /// Render a template server-side and return the raw output.
    fn render_template(&self, template: &str) -> AppResult<String>;

    /// Ordered state history for `entity_ids` between `start` and `end`,
    /// one sequence per entity.
    fn history(
        &self,
        entity_ids: &[String],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Vec<HistoryRecord>>>;
}
