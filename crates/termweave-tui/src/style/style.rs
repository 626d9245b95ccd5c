//! Style combining foreground, background, and attributes

use super::{Color, ColorDepth, Modifier};

/// Foreground, background and attributes.
///
/// Every field may be left unset. Unset fields inherit from the enclosing
/// style when styles are composed with [`Style::patch`]. `sub_modifier`
/// records attributes that were explicitly switched off, so a child can
/// cancel an attribute it would otherwise inherit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub add_modifier: Modifier,
    pub sub_modifier: Modifier,
}

impl Style {
    /// Style with nothing set
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            add_modifier: Modifier::NONE,
            sub_modifier: Modifier::NONE,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Switch attributes on
    pub const fn add_modifier(mut self, modifier: Modifier) -> Self {
        self.sub_modifier = self.sub_modifier.difference(modifier);
        self.add_modifier = self.add_modifier.union(modifier);
        self
    }

    /// Switch attributes off, overriding anything inherited
    pub const fn remove_modifier(mut self, modifier: Modifier) -> Self {
        self.add_modifier = self.add_modifier.difference(modifier);
        self.sub_modifier = self.sub_modifier.union(modifier);
        self
    }

    pub const fn bold(self) -> Self {
        self.add_modifier(Modifier::BOLD)
    }

    pub const fn dim(self) -> Self {
        self.add_modifier(Modifier::DIM)
    }

    pub const fn italic(self) -> Self {
        self.add_modifier(Modifier::ITALIC)
    }

    pub const fn underline(self) -> Self {
        self.add_modifier(Modifier::UNDERLINE)
    }

    pub const fn strikethrough(self) -> Self {
        self.add_modifier(Modifier::STRIKETHROUGH)
    }

    pub const fn reverse(self) -> Self {
        self.add_modifier(Modifier::REVERSE)
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// Compose `other` on top of `self`.
    ///
    /// Fields set in `other` win; unset fields fall back to `self`.
    pub const fn patch(self, other: Style) -> Self {
        Self {
            fg: match other.fg {
                Some(c) => Some(c),
                None => self.fg,
            },
            bg: match other.bg {
                Some(c) => Some(c),
                None => self.bg,
            },
            add_modifier: self
                .add_modifier
                .difference(other.sub_modifier)
                .union(other.add_modifier),
            sub_modifier: self
                .sub_modifier
                .difference(other.add_modifier)
                .union(other.sub_modifier),
        }
    }

    /// Only the background of this style, used for padding cells
    pub const fn background(&self) -> Self {
        Self {
            fg: None,
            bg: self.bg,
            add_modifier: Modifier::NONE,
            sub_modifier: Modifier::NONE,
        }
    }

    /// Project colors onto `depth`; attributes are untouched
    pub fn downsample(self, depth: ColorDepth) -> Self {
        let project = |color: Option<Color>| match color.map(|c| c.downsample(depth)) {
            Some(Color::Default) if depth == ColorDepth::NoColor => None,
            other => other,
        };
        Self {
            fg: project(self.fg),
            bg: project(self.bg),
            ..self
        }
    }
}
