pub mod config;
pub mod entities;
pub mod export;
pub mod generate;
pub mod init;
pub mod show;

use crate::config::Config;
use crate::core::card::HeatmapCard;
use crate::core::normalize::normalize;
use crate::errors::AppResult;
use crate::host::{HassClient, HostApi, StateSnapshot};
use chrono::Local;

/// Fetch the state registry, degrading to an empty snapshot on failure.
pub(crate) fn poll_states(host: &dyn HostApi) -> StateSnapshot {
    match host.states() {
        Ok(states) => StateSnapshot::new(states),
        Err(e) => {
            log::warn!("failed to read host states: {e}");
            StateSnapshot::default()
        }
    }
}

/// Connect to the host, normalize the card and run the first resolution
/// and backfill.
pub(crate) fn open_card(cfg: &Config) -> AppResult<(HassClient, HeatmapCard, StateSnapshot)> {
    let host = HassClient::new(&cfg.hass_url, &cfg.token)?;
    let card_cfg = normalize(&cfg.card);
    let mut card = HeatmapCard::new(card_cfg.clone());

    let snapshot = poll_states(&host);
    let now = Local::now();
    card.set_config(card_cfg, Some(&host as &dyn HostApi), &now);
    card.update_names(&snapshot);
    card.recalculate(&now);

    Ok((host, card, snapshot))
}
