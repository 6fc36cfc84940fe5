use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `init` command: write a configuration file holding the host
/// settings and a fully spelled-out default card.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::init_all(cli.config.as_deref().map(Path::new), cli.test)?;

    if !cli.test {
        println!("⚙️  Set `hass_url` and `token` (or HASS_URL / HASS_TOKEN) in:");
        println!("📄 {}", path.display());
    }
    Ok(())
}
