//! Horizontal alignment of lines within a field

use crate::style::{Line, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Alignment {
    /// No preference; laid out like `Left` unless a container decides
    #[default]
    None,
    Left,
    Center,
    Right,
    /// Stretch inter-word gaps so wrapped lines fill the width
    Justify,
}

impl Alignment {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Some(Self::None),
            "left" => Some(Self::Left),
            "center" | "centre" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }

    /// Place `line` in a field `width` cells wide.
    ///
    /// Lines wider than the field are truncated. Padding cells carry only
    /// `pad_style`; centering puts the odd cell on the right.
    pub fn align(self, line: Line, width: usize, pad_style: Style) -> Line {
        let line = line.truncate(width);
        let slack = width.saturating_sub(line.width());
        let placed = match self {
            Self::Center => {
                let left = slack / 2;
                line.pad_left(left, pad_style).pad_right(slack - left, pad_style)
            }
            Self::Right => line.pad_left(slack, pad_style),
            Self::None | Self::Left | Self::Justify => line.pad_right(slack, pad_style),
        };
        placed.fit(width, pad_style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_left_right() {
        assert_eq!(Alignment::Left.align(Line::raw("ab"), 5, Style::new()).plain(), "ab   ");
        assert_eq!(Alignment::Right.align(Line::raw("ab"), 5, Style::new()).plain(), "   ab");
    }

    #[test]
    fn test_align_center_floor_left() {
        assert_eq!(Alignment::Center.align(Line::raw("ab"), 5, Style::new()).plain(), " ab  ");
        assert_eq!(
            Alignment::Center.align(Line::raw("text"), 18, Style::new()).plain(),
            "       text       "
        );
    }

    #[test]
    fn test_align_truncates_overflow() {
        assert_eq!(Alignment::Center.align(Line::raw("abcdef"), 3, Style::new()).plain(), "abc");
    }

    #[test]
    fn test_align_emoji_sequences_stay_in_field() {
        let hearts = Line::raw("\u{2764}\u{FE0F}\u{2764}\u{FE0F}x");
        for align in [Alignment::Left, Alignment::Center, Alignment::Right] {
            let line = align.align(hearts.clone(), 2, Style::new());
            assert_eq!(line.width(), 2);
        }
        let line = Alignment::Right.align(Line::raw("e\u{301}"), 3, Style::new());
        assert_eq!(line.plain(), "  e\u{301}");
    }
}
