//! Color palettes behind the `dark` and `light` theme presets

use crate::style::Color;

/// The handful of colors a preset theme is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Titles, headers, bars in progress and spinners
    pub primary: Color,
    /// Bars that have not started
    pub pending: Color,
    /// The unfilled part of a bar
    pub muted: Color,
    /// Bars that reached their total
    pub done: Color,
    pub border: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            primary: Color::CYAN,
            pending: Color::MAGENTA,
            muted: Color::WHITE,
            done: Color::GREEN,
            border: Color::GRAY,
        }
    }

    pub const fn light() -> Self {
        Self {
            primary: Color::BLUE,
            pending: Color::MAGENTA,
            muted: Color::GRAY,
            done: Color::GREEN,
            border: Color::WHITE,
        }
    }
}
