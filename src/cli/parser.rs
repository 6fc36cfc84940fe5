use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rHeatmap
/// CLI application rendering Home Assistant activity heatmaps
#[derive(Parser)]
#[command(
    name = "rheatmap",
    version = env!("CARGO_PKG_VERSION"),
    about = "Calendar heatmap of Home Assistant state transitions by day and time-of-day segment",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Disable ANSI colors in the heatmap output
    #[arg(global = true, long = "no-color")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Report missing fields and print the normalized card settings"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Render the heatmap (static mode renders once, live mode keeps refreshing)
    Show {
        /// Render a single frame even in live mode
        #[arg(long)]
        once: bool,
    },

    /// Print the resolved entity list
    Entities,

    /// Export the computed grids
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate configuration snippets
    Generate {
        #[command(subcommand)]
        what: GenerateKind,
    },
}

#[derive(Subcommand)]
pub enum GenerateKind {
    /// Split the day into evenly spaced segments
    Segments {
        /// Number of segments
        #[arg(long, short = 'n', default_value_t = 4)]
        count: u32,
    },

    /// Build a color gradient of count thresholds
    Thresholds {
        #[arg(long, default_value_t = 5)]
        steps: u32,

        #[arg(long, default_value_t = 1)]
        min: u32,

        #[arg(long, default_value_t = 50)]
        max: u32,

        /// Color of the lowest range
        #[arg(long = "from-color", default_value = "#00ff00")]
        from_color: String,

        /// Color of the highest range
        #[arg(long = "to-color", default_value = "#ff0000")]
        to_color: String,
    },
}
