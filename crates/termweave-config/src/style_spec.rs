//! Parsing of style specifications such as `bold red on #202020`

use termweave_tui::style::{Color, Modifier, Style};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    #[error("unknown style word '{0}'")]
    UnknownWord(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("'{0}' must be followed by a {1}")]
    Dangling(&'static str, &'static str),
}

/// Parse a whitespace separated style specification.
///
/// Words are attribute names (`bold`, `not italic`), colors (`red`,
/// `bright_blue`, `#ff8800`, `color(208)`, `default`) and `on <color>` for
/// the background. An empty spec is the empty style.
pub fn parse_style(spec: &str) -> Result<Style, StyleParseError> {
    let mut style = Style::new();
    let mut words = spec.split_whitespace();

    while let Some(word) = words.next() {
        match word.to_ascii_lowercase().as_str() {
            "on" => {
                let color = words.next().ok_or(StyleParseError::Dangling("on", "color"))?;
                style = style.bg(parse_color(color)?);
            }
            "not" => {
                let name = words
                    .next()
                    .ok_or(StyleParseError::Dangling("not", "attribute"))?;
                let modifier = Modifier::from_name(name)
                    .ok_or_else(|| StyleParseError::UnknownWord(name.to_string()))?;
                style = style.remove_modifier(modifier);
            }
            lower => {
                if let Some(modifier) = Modifier::from_name(lower) {
                    style = style.add_modifier(modifier);
                } else if looks_like_color(lower) {
                    style = style.fg(parse_color(word)?);
                } else {
                    return Err(StyleParseError::UnknownWord(word.to_string()));
                }
            }
        }
    }
    Ok(style)
}

fn looks_like_color(word: &str) -> bool {
    word.starts_with('#') || word.starts_with("color(") || Color::from_name(word).is_some()
}

/// Parse one color: a name, `#rrggbb` or `color(N)` for the 256 palette
pub fn parse_color(word: &str) -> Result<Color, StyleParseError> {
    let invalid = || StyleParseError::InvalidColor(word.to_string());
    let lower = word.to_ascii_lowercase();

    if lower.starts_with('#') {
        return Color::from_hex(&lower).ok_or_else(invalid);
    }
    if let Some(index) = lower
        .strip_prefix("color(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return index.trim().parse::<u8>().map(Color::ansi256).map_err(|_| invalid());
    }
    Color::from_name(&lower).ok_or_else(invalid)
}
