//! Themes: keyed styles, dimensions, strings and flags
//!
//! Widgets look up their defaults here by well-known keys (see [`keys`]).
//! Precedence when resolving a style is explicit widget argument, then
//! theme entry, then widget default, then the ambient style.

mod palette;

pub use palette::Palette;

use crate::style::Style;
use std::collections::HashMap;

/// Well-known theme keys
pub mod keys {
    pub const PANEL_BORDER: &str = "panel.border";
    pub const PANEL_TITLE: &str = "panel.title";
    pub const PANEL_TITLE_PADDING: &str = "panel.title.padding";
    pub const TABLE_BORDER: &str = "table.border";
    pub const TABLE_HEADER: &str = "table.header";
    pub const PROGRESSBAR_COMPLETE: &str = "progressbar.complete";
    pub const PROGRESSBAR_INCOMPLETE: &str = "progressbar.incomplete";
    pub const PROGRESSBAR_FINISHED: &str = "progressbar.finished";
    pub const PROGRESSBAR_PENDING: &str = "progressbar.pending";
    pub const PROGRESSBAR_SEPARATOR: &str = "progressbar.separator";
    pub const SPINNER: &str = "spinner";
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub styles: HashMap<String, Style>,
    pub dimensions: HashMap<String, i32>,
    pub strings: HashMap<String, String>,
    pub flags: HashMap<String, bool>,
}

impl Theme {
    /// Theme with no entries; every widget falls back to its defaults
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, key: impl Into<String>, style: Style) -> Self {
        self.styles.insert(key.into(), style);
        self
    }

    pub fn with_dimension(mut self, key: impl Into<String>, value: i32) -> Self {
        self.dimensions.insert(key.into(), value);
        self
    }

    pub fn with_string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.strings.insert(key.into(), value.into());
        self
    }

    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.flags.insert(key.into(), value);
        self
    }

    pub fn style(&self, key: &str) -> Option<Style> {
        self.styles.get(key).copied()
    }

    pub fn style_or(&self, key: &str, default: Style) -> Style {
        self.style(key).unwrap_or(default)
    }

    /// Resolve a style for `key`.
    ///
    /// Explicit beats theme, theme beats `default`, and anything left unset
    /// inherits from `ambient`.
    pub fn resolve(
        &self,
        key: &str,
        explicit: Option<Style>,
        default: Style,
        ambient: Style,
    ) -> Style {
        match explicit {
            Some(style) => ambient.patch(style),
            None => ambient.patch(self.style_or(key, default)),
        }
    }

    pub fn dimension(&self, key: &str, default: i32) -> i32 {
        self.dimensions.get(key).copied().unwrap_or(default)
    }

    /// Dimension clamped to zero or more
    pub fn dimension_usize(&self, key: &str, default: usize) -> usize {
        match self.dimensions.get(key) {
            Some(v) => usize::try_from(*v).unwrap_or(0),
            None => default,
        }
    }

    pub fn string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(default)
    }

    pub fn flag(&self, key: &str, default: bool) -> bool {
        self.flags.get(key).copied().unwrap_or(default)
    }

    /// Overlay `other` on top of this theme; its entries win
    pub fn merge(mut self, other: &Theme) -> Self {
        self.styles
            .extend(other.styles.iter().map(|(k, v)| (k.clone(), *v)));
        self.dimensions
            .extend(other.dimensions.iter().map(|(k, v)| (k.clone(), *v)));
        self.strings
            .extend(other.strings.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.flags
            .extend(other.flags.iter().map(|(k, v)| (k.clone(), *v)));
        self
    }

    pub fn from_palette(palette: &Palette) -> Self {
        Self::empty()
            .with_style(keys::PANEL_BORDER, Style::new().fg(palette.border))
            .with_style(keys::PANEL_TITLE, Style::new().fg(palette.primary).bold())
            .with_style(keys::TABLE_BORDER, Style::new().fg(palette.border))
            .with_style(keys::TABLE_HEADER, Style::new().fg(palette.primary).bold())
            .with_style(keys::PROGRESSBAR_COMPLETE, Style::new().fg(palette.primary))
            .with_style(keys::PROGRESSBAR_INCOMPLETE, Style::new().fg(palette.muted))
            .with_style(keys::PROGRESSBAR_FINISHED, Style::new().fg(palette.done))
            .with_style(keys::PROGRESSBAR_PENDING, Style::new().fg(palette.pending))
            .with_style(keys::SPINNER, Style::new().fg(palette.primary))
    }

    pub fn dark() -> Self {
        Self::from_palette(&Palette::dark())
    }

    pub fn light() -> Self {
        Self::from_palette(&Palette::light())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_resolve_precedence() {
        let theme = Theme::empty().with_style("k", Style::new().fg(Color::RED));
        let default = Style::new().fg(Color::GREEN);
        let ambient = Style::new().fg(Color::WHITE).bg(Color::BLACK);

        let explicit = theme.resolve("k", Some(Style::new().fg(Color::BLUE)), default, ambient);
        assert_eq!(explicit.fg, Some(Color::BLUE));
        assert_eq!(explicit.bg, Some(Color::BLACK));

        let themed = theme.resolve("k", None, default, ambient);
        assert_eq!(themed.fg, Some(Color::RED));

        let defaulted = theme.resolve("other", None, default, ambient);
        assert_eq!(defaulted.fg, Some(Color::GREEN));

        let ambient_only = theme.resolve("other", None, Style::new(), ambient);
        assert_eq!(ambient_only, ambient);
    }

    #[test]
    fn test_lookups_with_defaults() {
        let theme = Theme::empty()
            .with_dimension(keys::PANEL_TITLE_PADDING, 0)
            .with_string(keys::PROGRESSBAR_COMPLETE, "#")
            .with_flag("x", true);

        assert_eq!(theme.dimension(keys::PANEL_TITLE_PADDING, 1), 0);
        assert_eq!(theme.dimension("missing", 7), 7);
        assert_eq!(theme.string(keys::PROGRESSBAR_COMPLETE, "━"), "#");
        assert_eq!(theme.string("missing", "━"), "━");
        assert!(theme.flag("x", false));
    }

    #[test]
    fn test_negative_dimension_clamps() {
        let theme = Theme::empty().with_dimension("pad", -3);
        assert_eq!(theme.dimension_usize("pad", 1), 0);
    }

    #[test]
    fn test_merge_overrides() {
        let merged = Theme::dark().merge(
            &Theme::empty().with_style(keys::PANEL_BORDER, Style::new().fg(Color::RED)),
        );
        assert_eq!(merged.style(keys::PANEL_BORDER).and_then(|s| s.fg), Some(Color::RED));
        assert!(merged.style(keys::TABLE_HEADER).is_some());
    }
}
