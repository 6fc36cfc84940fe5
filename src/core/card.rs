//! The heatmap card: owns normalized config, the resolved entity set, the
//! aggregation state and the refresh timer, and reacts to host events.

use crate::core::aggregator::HistoryAggregator;
use crate::core::calculator::rolling::{rolling_days, window_start};
use crate::core::normalize::CardConfig;
use crate::core::resolver::resolve_entities;
use crate::core::scheduler::{RefreshMode, RefreshTimer};
use crate::host::{HostApi, StateSnapshot};
use crate::models::day::RollingDay;
use crate::models::grid::HeatmapRow;
use crate::utils::date::as_of_label;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::time::Instant;

/// What the card currently has to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Loading,
    NoEntities,
    Ready,
}

#[derive(Debug)]
pub struct HeatmapCard {
    config: CardConfig,
    resolved: Vec<String>,
    aggregator: HistoryAggregator,
    days: Vec<RollingDay>,
    rows: Vec<HeatmapRow>,
    friendly_names: HashMap<String, String>,
    loading: bool,
    static_as_of: String,
    timer: Option<RefreshTimer>,
}

impl HeatmapCard {
    pub fn new(config: CardConfig) -> Self {
        Self {
            config,
            resolved: Vec::new(),
            aggregator: HistoryAggregator::new(),
            days: Vec::new(),
            rows: Vec::new(),
            friendly_names: HashMap::new(),
            loading: true,
            static_as_of: String::new(),
            timer: None,
        }
    }

    // ---------------------------
    // Lifecycle
    // ---------------------------

    /// Replace the configuration. Known timestamps are discarded and the
    /// static "as of" stamp is taken. With a host, resolution starts
    /// immediately.
    pub fn set_config<Tz>(
        &mut self,
        config: CardConfig,
        host: Option<&dyn HostApi>,
        now: &DateTime<Tz>,
    ) where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let restart_timer = self.timer.is_some();
        self.config = config;
        self.aggregator.clear();
        self.static_as_of = as_of_label(now);
        if restart_timer {
            self.detach();
            self.attach(Instant::now());
        }

        if let Some(host) = host {
            self.resolve_target_entities(host, now);
        }
    }

    /// Create the refresh timer (live mode only).
    pub fn attach(&mut self, at: Instant) {
        if self.config.refresh_mode == RefreshMode::Live {
            self.timer = Some(RefreshTimer::every_minutes(self.config.refresh_interval, at));
        }
    }

    /// Cancel the refresh timer.
    pub fn detach(&mut self) {
        self.timer = None;
    }

    pub fn is_attached(&self) -> bool {
        self.timer.is_some()
    }

    // ---------------------------
    // Host interaction
    // ---------------------------

    pub fn resolve_target_entities<Tz: TimeZone>(
        &mut self,
        host: &dyn HostApi,
        now: &DateTime<Tz>,
    ) {
        self.loading = true;
        self.resolved = resolve_entities(host, &self.config);
        self.aggregator.track(&self.resolved);
        log::info!("tracking {} entities", self.resolved.len());

        self.generate_rolling_days(now);
        self.fetch_history(host, now);
    }

    /// Backfill from the host's history for the whole window. A failed
    /// fetch leaves previously known timestamps untouched.
    pub fn fetch_history<Tz: TimeZone>(&mut self, host: &dyn HostApi, now: &DateTime<Tz>) {
        if !self.resolved.is_empty() {
            let end = now.with_timezone(&Utc);
            let start = window_start(end, self.config.days_to_show);

            match host.history(&self.resolved, start, end) {
                Ok(histories) => {
                    let cfg = &self.config;
                    let added = self.aggregator.backfill(&histories, |s| cfg.is_active(s));
                    log::debug!("history backfill added {added} events");
                }
                Err(e) => log::error!("Error fetching history: {e}"),
            }
        }

        self.recalculate(now);
        self.loading = false;
    }

    /// Remember friendly names from the host's state registry.
    pub fn update_names(&mut self, snapshot: &StateSnapshot) {
        for id in &self.resolved {
            if let Some(name) = snapshot.get(id).and_then(|s| s.friendly_name()) {
                self.friendly_names.insert(id.clone(), name.to_string());
            }
        }
    }

    /// React to a host state update. Returns true when a new transition was
    /// recorded and the grids were recomputed.
    pub fn on_states_changed<Tz: TimeZone>(
        &mut self,
        old: &StateSnapshot,
        new: &StateSnapshot,
        now: &DateTime<Tz>,
    ) -> bool {
        self.update_names(new);
        if self.config.refresh_mode == RefreshMode::Static || self.resolved.is_empty() {
            return false;
        }

        let at = now.with_timezone(&Utc);
        let mut recorded = false;
        for change in old.diff(new, &self.resolved) {
            let cfg = &self.config;
            if self.aggregator.record_transition(
                &change.entity_id,
                &change.old_state,
                &change.new_state,
                at,
                |s| cfg.is_active(s),
            ) {
                log::debug!(
                    "{}: {} -> {}",
                    change.entity_id,
                    change.old_state,
                    change.new_state
                );
                recorded = true;
            }
        }

        if recorded {
            self.generate_rolling_days(now);
            self.recalculate(now);
        }
        recorded
    }

    /// Timer tick: slide the window when the refresh interval elapsed.
    pub fn tick<Tz: TimeZone>(&mut self, at: Instant, now: &DateTime<Tz>) -> bool {
        let due = self.timer.as_mut().is_some_and(|t| t.poll(at));
        if due {
            self.generate_rolling_days(now);
            self.recalculate(now);
        }
        due
    }

    // ---------------------------
    // Aggregation
    // ---------------------------

    pub fn generate_rolling_days<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        self.days = rolling_days(now.date_naive(), self.config.days_to_show);
    }

    pub fn recalculate<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        if self.days.is_empty() {
            self.generate_rolling_days(now);
        }

        let cfg = &self.config;
        let names = &self.friendly_names;
        self.rows = self.aggregator.compute_rows(cfg, &self.resolved, &self.days, now, |id| {
            cfg.configured_name(id)
                .or_else(|| names.get(id).map(String::as_str))
                .unwrap_or(id)
                .to_string()
        });
    }

    // ---------------------------
    // Accessors
    // ---------------------------

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn resolved_entities(&self) -> &[String] {
        &self.resolved
    }

    pub fn rolling_days(&self) -> &[RollingDay] {
        &self.days
    }

    pub fn rows(&self) -> &[HeatmapRow] {
        &self.rows
    }

    pub fn aggregator(&self) -> &HistoryAggregator {
        &self.aggregator
    }

    pub fn static_as_of(&self) -> &str {
        &self.static_as_of
    }

    pub fn status(&self) -> CardStatus {
        if self.loading {
            CardStatus::Loading
        } else if self.rows.is_empty() {
            CardStatus::NoEntities
        } else {
            CardStatus::Ready
        }
    }

    /// Footnote describing how fresh the data is.
    pub fn footnote(&self) -> String {
        match self.config.refresh_mode {
            RefreshMode::Static => format!("Static Data - Effective {}", self.static_as_of),
            RefreshMode::Live => format!(
                "Live Data - Sliding Window Refreshes every {}m",
                self.config.refresh_interval
            ),
        }
    }
}
