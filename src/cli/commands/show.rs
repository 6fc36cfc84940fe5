use crate::cli::commands::{open_card, poll_states};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::scheduler::{CancelFlag, RefreshMode};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::clear_screen;
use crate::ui::{RenderOptions, render_card};
use chrono::Local;
use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

/// Granularity at which the watch loop notices Ctrl-C.
const SLEEP_SLICE: Duration = Duration::from_millis(200);

pub fn handle(cmd: &Commands, cfg: &Config, opts: RenderOptions) -> AppResult<()> {
    let Commands::Show { once } = cmd else {
        return Ok(());
    };

    let (host, mut card, mut snapshot) = open_card(cfg)?;

    if *once || card.config().refresh_mode == RefreshMode::Static {
        print!("{}", render_card(&card, opts));
        return Ok(());
    }

    let cancel = CancelFlag::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || cancel.cancel())
            .map_err(|e| AppError::Other(format!("cannot install Ctrl-C handler: {e}")))?;
    }

    card.attach(Instant::now());
    redraw(&card, opts)?;

    let poll = Duration::from_secs(cfg.poll_seconds.max(1));
    while !cancel.is_cancelled() {
        let wake = Instant::now() + poll;
        while Instant::now() < wake && !cancel.is_cancelled() {
            thread::sleep(SLEEP_SLICE);
        }
        if cancel.is_cancelled() {
            break;
        }

        let now = Local::now();
        let mut dirty = card.tick(Instant::now(), &now);

        let newer = poll_states(&host);
        if !newer.is_empty() {
            dirty |= card.on_states_changed(&snapshot, &newer, &now);
            snapshot = newer;
        }

        if dirty {
            redraw(&card, opts)?;
        }
    }

    card.detach();
    log::info!("watch loop stopped");
    Ok(())
}

fn redraw(card: &crate::core::card::HeatmapCard, opts: RenderOptions) -> AppResult<()> {
    clear_screen();
    print!("{}", render_card(card, opts));
    io::stdout().flush()?;
    Ok(())
}
