//! History aggregator: per-entity event timestamps, fed by bulk backfill and
//! live transitions, bucketed into day × segment grids on demand.

use crate::core::calculator::bucket::classify;
use crate::core::calculator::rolling::{day_index, window_start};
use crate::core::normalize::{COMBINED_ROW_NAME, CardConfig};
use crate::models::day::RollingDay;
use crate::models::grid::{Grid, HeatmapRow};
use crate::models::segment::Segment;
use crate::models::state::HistoryRecord;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Default, Clone)]
pub struct HistoryAggregator {
    events: BTreeMap<String, BTreeSet<DateTime<Utc>>>,
}

impl HistoryAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking `entity_ids`. Already known timestamps are kept.
    pub fn track(&mut self, entity_ids: &[String]) {
        for id in entity_ids {
            self.events.entry(id.clone()).or_default();
        }
    }

    pub fn is_tracked(&self, entity_id: &str) -> bool {
        self.events.contains_key(entity_id)
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Sorted, deduplicated timestamps for one entity.
    pub fn events_for(&self, entity_id: &str) -> Vec<DateTime<Utc>> {
        self.events
            .get(entity_id)
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn total_events(&self) -> usize {
        self.events.values().map(BTreeSet::len).sum()
    }

    /// Merge inactive→active transitions found in bulk history. Sequences
    /// for untracked entities are ignored. Returns how many timestamps were
    /// new.
    pub fn backfill<F>(&mut self, histories: &[Vec<HistoryRecord>], is_active: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let mut added = 0;

        for history in histories {
            let Some(entity_id) = history.first().and_then(|r| r.entity_id.as_deref()) else {
                continue;
            };
            let Some(known) = self.events.get_mut(entity_id) else {
                continue;
            };

            for pair in history.windows(2) {
                if is_active(&pair[1].state)
                    && !is_active(&pair[0].state)
                    && known.insert(pair[1].last_changed)
                {
                    added += 1;
                }
            }
        }

        added
    }

    /// Record `at` when the entity went from an inactive to an active state.
    pub fn record_transition<F>(
        &mut self,
        entity_id: &str,
        old_state: &str,
        new_state: &str,
        at: DateTime<Utc>,
        is_active: F,
    ) -> bool
    where
        F: Fn(&str) -> bool,
    {
        if !is_active(new_state) || is_active(old_state) {
            return false;
        }
        self.events
            .entry(entity_id.to_string())
            .or_default()
            .insert(at)
    }

    /// Drop timestamps older than `cutoff`.
    pub fn prune(&mut self, cutoff: DateTime<Utc>) {
        for times in self.events.values_mut() {
            times.retain(|t| *t >= cutoff);
        }
    }

    /// Prune to the window and build one row per entity, or a single
    /// combined row when the card merges its entities.
    pub fn compute_rows<Tz, N>(
        &mut self,
        cfg: &CardConfig,
        entity_ids: &[String],
        days: &[RollingDay],
        now: &DateTime<Tz>,
        display_name: N,
    ) -> Vec<HeatmapRow>
    where
        Tz: TimeZone,
        N: Fn(&str) -> String,
    {
        let cutoff = window_start(now.with_timezone(&Utc), cfg.days_to_show);
        self.prune(cutoff);

        if entity_ids.is_empty() {
            return Vec::new();
        }

        let tz = now.timezone();

        if cfg.combine_entities {
            let merged = entity_ids
                .iter()
                .filter_map(|id| self.events.get(id))
                .flatten()
                .copied();
            let grid = fill_grid(merged, &cfg.segments, days, cfg.shift_overnight, &tz);
            let name = if cfg.name.trim().is_empty() {
                COMBINED_ROW_NAME.to_string()
            } else {
                cfg.name.clone()
            };

            return vec![HeatmapRow {
                name,
                entity_ids: entity_ids.to_vec(),
                grid,
            }];
        }

        entity_ids
            .iter()
            .map(|id| {
                let times = self.events.entry(id.clone()).or_default();
                let grid = fill_grid(
                    times.iter().copied(),
                    &cfg.segments,
                    days,
                    cfg.shift_overnight,
                    &tz,
                );
                HeatmapRow {
                    name: display_name(id),
                    entity_ids: vec![id.clone()],
                    grid,
                }
            })
            .collect()
    }
}

fn fill_grid<I, Tz>(
    times: I,
    segments: &[Segment],
    days: &[RollingDay],
    shift_overnight: bool,
    tz: &Tz,
) -> Grid
where
    I: IntoIterator<Item = DateTime<Utc>>,
    Tz: TimeZone,
{
    let mut grid = Grid::new(days.len(), segments.len());

    for t in times {
        let local = t.with_timezone(tz);
        let Some(bucket) = classify(&local, segments, shift_overnight) else {
            continue;
        };
        if let Some(day) = day_index(days, bucket.date) {
            grid.increment(day, bucket.segment);
        }
    }

    grid
}
