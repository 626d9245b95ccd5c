//! Color and ANSI support detection from the environment

use crate::style::ColorDepth;
use std::env;

/// Environment variables that influence terminal capability detection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvHints {
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub no_color: bool,
    pub force_color: Option<String>,
    pub wt_session: bool,
    pub columns: Option<u16>,
    pub lines: Option<u16>,
}

impl EnvHints {
    pub fn from_env() -> Self {
        let var = |name: &str| env::var(name).ok();
        Self {
            term: var("TERM"),
            colorterm: var("COLORTERM"),
            no_color: var("NO_COLOR").is_some_and(|v| !v.is_empty()),
            force_color: var("FORCE_COLOR"),
            wt_session: var("WT_SESSION").is_some(),
            columns: var("COLUMNS").and_then(|v| v.trim().parse().ok()),
            lines: var("LINES").and_then(|v| v.trim().parse().ok()),
        }
    }

    /// FORCE_COLOR as a depth, if set
    fn forced_depth(&self) -> Option<ColorDepth> {
        let value = self.force_color.as_deref()?.trim().to_ascii_lowercase();
        Some(match value.as_str() {
            "0" | "false" => ColorDepth::NoColor,
            "2" => ColorDepth::Ansi256,
            "3" => ColorDepth::TrueColor,
            _ => ColorDepth::Ansi16,
        })
    }

    fn is_dumb(&self) -> bool {
        self.term.as_deref() == Some("dumb")
    }
}

/// Pick the richest color depth the output is believed to support.
///
/// FORCE_COLOR wins over everything, then NO_COLOR. Without either, output
/// that is not a terminal gets no color; otherwise COLORTERM, TERM and
/// WT_SESSION decide.
pub fn detect_color_depth(hints: &EnvHints, is_tty: bool) -> ColorDepth {
    if let Some(depth) = hints.forced_depth() {
        return depth;
    }
    if hints.no_color || !is_tty || hints.is_dumb() {
        return ColorDepth::NoColor;
    }

    let colorterm = hints.colorterm.as_deref().unwrap_or("").to_ascii_lowercase();
    if colorterm == "truecolor" || colorterm == "24bit" {
        return ColorDepth::TrueColor;
    }

    let term = hints.term.as_deref().unwrap_or("");
    if term.contains("256color") {
        ColorDepth::Ansi256
    } else if hints.wt_session {
        ColorDepth::TrueColor
    } else if term.is_empty() {
        ColorDepth::NoColor
    } else {
        ColorDepth::Ansi16
    }
}

/// Whether escape sequences (attributes, cursor movement) may be written
pub fn detect_ansi_support(hints: &EnvHints, is_tty: bool) -> bool {
    match hints.forced_depth() {
        Some(ColorDepth::NoColor) => is_tty && !hints.is_dumb(),
        Some(_) => true,
        None => is_tty && !hints.is_dumb(),
    }
}
