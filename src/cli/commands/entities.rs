use crate::cli::commands::open_card;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (_, card, snapshot) = open_card(cfg)?;

    if card.resolved_entities().is_empty() {
        info("No entities selected or matched targeting criteria.");
        return Ok(());
    }

    for id in card.resolved_entities() {
        let name = card
            .config()
            .configured_name(id)
            .or_else(|| snapshot.get(id).and_then(|s| s.friendly_name()));
        let state = snapshot.state_of(id).unwrap_or("unknown");
        let events = card.aggregator().events_for(id).len();

        match name {
            Some(n) => println!("{id:<40} {n:<30} {state:<12} {events} events"),
            None => println!("{id:<40} {:<30} {state:<12} {events} events", ""),
        }
    }
    Ok(())
}
