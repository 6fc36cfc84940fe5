use crate::cli::parser::{Commands, GenerateKind};
use crate::core::generators::{SegmentSpec, even_segments, gradient_thresholds};
use crate::errors::AppResult;
use crate::models::threshold::Threshold;
use serde::Serialize;

#[derive(Serialize)]
struct SegmentsSnippet {
    segments: Vec<SegmentSpec>,
}

#[derive(Serialize)]
struct ThresholdsSnippet {
    thresholds: Vec<Threshold>,
}

/// Print a YAML snippet ready to paste under `card:`.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Generate { what } = cmd {
        let yaml = match what {
            GenerateKind::Segments { count } => serde_yaml::to_string(&SegmentsSnippet {
                segments: even_segments(*count),
            })?,
            GenerateKind::Thresholds {
                steps,
                min,
                max,
                from_color,
                to_color,
            } => serde_yaml::to_string(&ThresholdsSnippet {
                thresholds: gradient_thresholds(*steps, *min, *max, from_color, to_color)?,
            })?,
        };
        print!("{yaml}");
    }
    Ok(())
}
