//! Refresh scheduling: the live/static mode switch, the card-owned refresh
//! timer and the cancel flag that stops the watch loop.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshMode {
    /// Recompute on a timer and on every relevant state change.
    #[default]
    Live,
    /// Compute once and keep the snapshot.
    Static,
}

impl RefreshMode {
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "live" => Some(RefreshMode::Live),
            "static" => Some(RefreshMode::Static),
            _ => None,
        }
    }
}

/// Fixed-interval timer owned by a card. Dropping it cancels it.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    next_due: Instant,
}

impl RefreshTimer {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn every_minutes(minutes: u32, now: Instant) -> Self {
        Self::new(Duration::from_secs(u64::from(minutes.max(1)) * 60), now)
    }

    /// Returns true once per elapsed interval. Missed ticks are coalesced.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_due {
            return false;
        }
        while self.next_due <= now {
            self.next_due += self.interval;
        }
        true
    }
}

/// Shared stop flag, flipped by the Ctrl-C handler.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
