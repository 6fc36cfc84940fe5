use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::normalize;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config, path: Option<&Path>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        edit_config,
        editor,
    } = cmd
    {
        let path: PathBuf = path.map(Path::to_path_buf).unwrap_or_else(Config::config_file);

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if path.exists() {
                let missing = Config::missing_keys(&path)?;
                if missing.is_empty() {
                    success("All configuration fields present");
                } else {
                    warning(format!("Missing fields (defaults apply): {}", missing.join(", ")));
                }
            } else {
                warning(format!("{} not found, using defaults", path.display()));
            }

            println!("\nNormalized card:\n");
            println!("{}", serde_yaml::to_string(&normalize(&cfg.card))?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(&path, editor.clone());
        }
    }

    Ok(())
}

fn edit(path: &Path, requested: Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!("Configuration file edited using '{editor_to_use}'"));
        }
        _ => {
            warning(format!(
                "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
            ));
            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited using fallback '{default_editor}'"
                    ));
                }
                _ => crate::ui::messages::error(format!(
                    "Failed to edit configuration file using fallback '{default_editor}'"
                )),
            }
        }
    }
}
