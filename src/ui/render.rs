//! Terminal rendering of a [`HeatmapCard`].

use crate::core::card::{CardStatus, HeatmapCard};
use crate::core::colors::color_for_count;
use crate::core::normalize::CardConfig;
use crate::models::grid::HeatmapRow;
use crate::ui::style::GridStyle;
use crate::utils::colors::Rgb;
use crate::utils::formatting::{center, pad_display};
use ansi_term::{Colour, Style};
use unicode_width::UnicodeWidthStr;

pub const LOADING_TEXT: &str = "Fetching database history...";
pub const NO_ENTITIES_TEXT: &str = "No entities selected or matched targeting criteria.";
const ICON_GLYPH: &str = "▦";

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Emit ANSI colors. Off for pipes and tests.
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

fn colour(css: &str) -> Option<Colour> {
    Rgb::from_hex(css).map(|Rgb(r, g, b)| Colour::RGB(r, g, b))
}

/// Black or white text, whichever reads better on `bg`.
fn text_on(bg: &str) -> Colour {
    match Rgb::from_hex(bg) {
        Some(Rgb(r, g, b)) => {
            let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
            if luma > 150.0 { Colour::Black } else { Colour::White }
        }
        None => Colour::White,
    }
}

pub fn render_card(card: &HeatmapCard, opts: RenderOptions) -> String {
    match card.status() {
        CardStatus::Loading => return format!("{LOADING_TEXT}\n"),
        CardStatus::NoEntities => return format!("{NO_ENTITIES_TEXT}\n"),
        CardStatus::Ready => {}
    }

    let cfg = card.config();
    let mut out = String::new();

    if let Some(header) = render_header(cfg, opts) {
        out.push_str(&header);
        out.push_str("\n\n");
    }

    let longest = cfg
        .segments
        .iter()
        .map(|s| UnicodeWidthStr::width(s.display_label.as_str()))
        .max()
        .unwrap_or(0);
    let style = GridStyle::from_config(cfg, longest);

    for (i, row) in card.rows().iter().enumerate() {
        if i > 0 {
            out.push_str(&"\n".repeat(style.entity_gap_lines.max(1)));
        }
        render_row(&mut out, card, row, &style, opts);
    }

    if cfg.show_footnote {
        out.push('\n');
        let note = card.footnote();
        if opts.color {
            out.push_str(&Style::new().dimmed().italic().paint(note).to_string());
        } else {
            out.push_str(&note);
        }
        out.push('\n');
    }

    out
}

fn render_header(cfg: &CardConfig, opts: RenderOptions) -> Option<String> {
    if cfg.name.is_empty() && !cfg.show_icon {
        return None;
    }

    let mut line = String::new();
    if opts.color {
        line.push_str(&Style::new().bold().paint(cfg.name.as_str()).to_string());
    } else {
        line.push_str(&cfg.name);
    }

    if cfg.show_icon {
        if !line.is_empty() {
            line.push(' ');
        }
        match colour(&cfg.icon_color).filter(|_| opts.color) {
            Some(c) => line.push_str(&c.paint(ICON_GLYPH).to_string()),
            None => line.push_str(ICON_GLYPH),
        }
    }

    Some(line)
}

fn render_row(
    out: &mut String,
    card: &HeatmapCard,
    row: &HeatmapRow,
    style: &GridStyle,
    opts: RenderOptions,
) {
    let cfg = card.config();
    let gap = " ".repeat(style.gap_cols);

    if opts.color {
        out.push_str(&Style::new().bold().paint(row.name.as_str()).to_string());
    } else {
        out.push_str(&row.name);
    }
    out.push('\n');

    // Day header
    out.push_str(&" ".repeat(style.label_cols));
    for day in card.rolling_days() {
        out.push_str(&gap);
        out.push_str(&center(&day.label, style.cell_cols));
    }
    out.push('\n');

    for (seg_idx, segment) in cfg.segments.iter().enumerate() {
        for line in 0..style.cell_lines {
            let label = if line == 0 { segment.display_label.as_str() } else { "" };
            out.push_str(&pad_display(label, style.label_cols));

            for day_idx in 0..card.rolling_days().len() {
                let count = row.grid.get(day_idx, seg_idx);
                out.push_str(&gap);
                out.push_str(&render_cell(cfg, count, line == 0, style, opts));
            }
            out.push('\n');
        }
        out.push_str(&"\n".repeat(style.gap_lines));
    }
}

fn render_cell(
    cfg: &CardConfig,
    count: u32,
    with_text: bool,
    style: &GridStyle,
    opts: RenderOptions,
) -> String {
    let inner_cols = if style.outlined {
        style.cell_cols - 2
    } else {
        style.cell_cols
    };

    let text = if with_text && cfg.show_total && count > 0 {
        count.to_string()
    } else if !opts.color {
        // Without colors an empty cell still needs a visible marker.
        if count > 0 { "#".to_string() } else { ".".to_string() }
    } else {
        String::new()
    };
    let body = center(&text, inner_cols);

    let body = if opts.color {
        let bg = color_for_count(count, cfg);
        let mut s = Style::new().fg(text_on(bg));
        if let Some(c) = colour(bg) {
            s = s.on(c);
        }
        if cfg.show_glow && count > 0 {
            s = s.bold();
        }
        s.paint(body).to_string()
    } else {
        body
    };

    if !style.outlined {
        return body;
    }

    let (l, r) = ("▕", "▏");
    match colour(&cfg.indicator_outline_color).filter(|_| opts.color) {
        Some(c) => format!("{}{body}{}", c.paint(l), c.paint(r)),
        None => format!("{l}{body}{r}"),
    }
}
