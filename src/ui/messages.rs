//! Operator-facing status lines, kept apart from `log` diagnostics.
//! Info and success print to stdout, warnings and errors to stderr. The
//! badge is only painted when the target stream is a terminal.

use ansi_term::Colour::{Blue, Green, Red, Yellow};
use ansi_term::Style;
use std::fmt;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn badge(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn style(self) -> Style {
        match self {
            Level::Info => Blue.bold(),
            Level::Success => Green.bold(),
            Level::Warning => Yellow.bold(),
            Level::Error => Red.bold(),
        }
    }

    fn on_stderr(self) -> bool {
        matches!(self, Level::Warning | Level::Error)
    }
}

fn emit(level: Level, msg: impl fmt::Display) {
    let tty = if level.on_stderr() {
        io::stderr().is_terminal()
    } else {
        io::stdout().is_terminal()
    };

    let badge = if tty {
        level.style().paint(level.badge()).to_string()
    } else {
        level.badge().to_string()
    };

    if level.on_stderr() {
        eprintln!("{badge} {msg}");
    } else {
        println!("{badge} {msg}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Wipe the terminal and home the cursor before a live redraw.
pub fn clear_screen() {
    print!("\x1b[2J\x1b[H");
}
