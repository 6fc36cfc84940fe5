use crate::cli::commands::open_card;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::export_card;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let (_, card, _) = open_card(cfg)?;
        export_card(&card, *format, Path::new(file), *force)?;
    }
    Ok(())
}
