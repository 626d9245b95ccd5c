//! Border glyph sets shared by panels and tables

/// Line drawing style for borders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum BorderType {
    /// Plain ASCII (+ - |)
    Ascii,
    /// Single line with square corners (┌ ─ ┐)
    Square,
    /// Single line with rounded corners (╭ ─ ╮)
    #[default]
    Rounded,
    /// Double line (╔ ═ ╗)
    Double,
    /// Heavy line (┏ ━ ┓)
    Heavy,
}

impl BorderType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ascii" => Some(Self::Ascii),
            "square" | "single" => Some(Self::Square),
            "rounded" => Some(Self::Rounded),
            "double" => Some(Self::Double),
            "heavy" | "thick" => Some(Self::Heavy),
            _ => None,
        }
    }

    pub(crate) fn chars(&self) -> BorderChars {
        match self {
            BorderType::Ascii => BorderChars {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                top_tee: '+',
                bottom_tee: '+',
                left_tee: '+',
                right_tee: '+',
                cross: '+',
            },
            BorderType::Square => BorderChars {
                horizontal: '─',
                vertical: '│',
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                top_tee: '┬',
                bottom_tee: '┴',
                left_tee: '├',
                right_tee: '┤',
                cross: '┼',
            },
            BorderType::Rounded => BorderChars {
                top_left: '╭',
                top_right: '╮',
                bottom_left: '╰',
                bottom_right: '╯',
                ..BorderType::Square.chars()
            },
            BorderType::Double => BorderChars {
                horizontal: '═',
                vertical: '║',
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                top_tee: '╦',
                bottom_tee: '╩',
                left_tee: '╠',
                right_tee: '╣',
                cross: '╬',
            },
            BorderType::Heavy => BorderChars {
                horizontal: '━',
                vertical: '┃',
                top_left: '┏',
                top_right: '┓',
                bottom_left: '┗',
                bottom_right: '┛',
                top_tee: '┳',
                bottom_tee: '┻',
                left_tee: '┣',
                right_tee: '┫',
                cross: '╋',
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BorderChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub top_tee: char,
    pub bottom_tee: char,
    pub left_tee: char,
    pub right_tee: char,
    pub cross: char,
}
