//! Terminal colors and color-depth downsampling

use crossterm::style::Color as CrosstermColor;

/// Richest color representation a terminal accepts.
///
/// Variants are ordered from poorest to richest, so `a < b` means `a` can
/// display strictly fewer colors than `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ColorDepth {
    /// No color output at all
    #[default]
    NoColor,
    /// The 16 standard ANSI colors
    Ansi16,
    /// The xterm 256-color palette
    Ansi256,
    /// 24-bit RGB
    TrueColor,
}

impl ColorDepth {
    /// Parse a depth name as used in configuration files
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" | "nocolor" | "no_color" => Some(Self::NoColor),
            "ansi16" | "16" => Some(Self::Ansi16),
            "ansi256" | "256" => Some(Self::Ansi256),
            "truecolor" | "24bit" | "rgb" => Some(Self::TrueColor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoColor => "none",
            Self::Ansi16 => "ansi16",
            Self::Ansi256 => "ansi256",
            Self::TrueColor => "truecolor",
        }
    }
}

/// Terminal color
///
/// Exactly one representation is authoritative for a value. Converting to a
/// poorer representation goes through [`Color::downsample`], never the reverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Color {
    /// The terminal's own default color
    #[default]
    Default,
    /// One of the 16 standard ANSI colors (0-15)
    Ansi16(u8),
    /// Index into the xterm 256-color palette
    Ansi256(u8),
    /// 24-bit RGB color
    Rgb(u8, u8, u8),
}

impl Color {
    pub const BLACK: Self = Self::Ansi16(0);
    pub const RED: Self = Self::Ansi16(1);
    pub const GREEN: Self = Self::Ansi16(2);
    pub const YELLOW: Self = Self::Ansi16(3);
    pub const BLUE: Self = Self::Ansi16(4);
    pub const MAGENTA: Self = Self::Ansi16(5);
    pub const CYAN: Self = Self::Ansi16(6);
    pub const WHITE: Self = Self::Ansi16(7);
    pub const GRAY: Self = Self::Ansi16(8);
    pub const BRIGHT_RED: Self = Self::Ansi16(9);
    pub const BRIGHT_GREEN: Self = Self::Ansi16(10);
    pub const BRIGHT_YELLOW: Self = Self::Ansi16(11);
    pub const BRIGHT_BLUE: Self = Self::Ansi16(12);
    pub const BRIGHT_MAGENTA: Self = Self::Ansi16(13);
    pub const BRIGHT_CYAN: Self = Self::Ansi16(14);
    pub const BRIGHT_WHITE: Self = Self::Ansi16(15);

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb(r, g, b)
    }

    /// Create a standard ANSI color; indexes wrap into 0-15
    pub const fn ansi16(index: u8) -> Self {
        Self::Ansi16(index % 16)
    }

    /// Create an indexed 256-palette color
    pub const fn ansi256(index: u8) -> Self {
        Self::Ansi256(index)
    }

    /// Parse a hex color string (e.g., "#ff0000" or "ff0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::Rgb(r, g, b))
    }

    /// Look up one of the 16 named ANSI colors (`red`, `bright_blue`, `gray`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase().replace('-', "_");
        let color = match name.as_str() {
            "default" => Self::Default,
            "black" => Self::BLACK,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "yellow" => Self::YELLOW,
            "blue" => Self::BLUE,
            "magenta" => Self::MAGENTA,
            "cyan" => Self::CYAN,
            "white" => Self::WHITE,
            "gray" | "grey" | "bright_black" => Self::GRAY,
            "bright_red" => Self::BRIGHT_RED,
            "bright_green" => Self::BRIGHT_GREEN,
            "bright_yellow" => Self::BRIGHT_YELLOW,
            "bright_blue" => Self::BRIGHT_BLUE,
            "bright_magenta" => Self::BRIGHT_MAGENTA,
            "bright_cyan" => Self::BRIGHT_CYAN,
            "bright_white" => Self::BRIGHT_WHITE,
            _ => return None,
        };
        Some(color)
    }

    /// The poorest depth able to display this color unchanged
    pub const fn depth(&self) -> ColorDepth {
        match self {
            Self::Default => ColorDepth::NoColor,
            Self::Ansi16(_) => ColorDepth::Ansi16,
            Self::Ansi256(_) => ColorDepth::Ansi256,
            Self::Rgb(..) => ColorDepth::TrueColor,
        }
    }

    /// Project this color onto the palette of `target`.
    ///
    /// Total and deterministic. Colors already displayable at `target` are
    /// returned unchanged; `NoColor` maps everything to [`Color::Default`].
    pub fn downsample(self, target: ColorDepth) -> Self {
        if self.depth() <= target {
            return self;
        }
        match target {
            ColorDepth::NoColor => Self::Default,
            ColorDepth::Ansi16 => match self {
                Self::Ansi256(index) => Self::Ansi16(ANSI256_TO_ANSI16[index as usize]),
                Self::Rgb(r, g, b) => {
                    Self::Ansi16(ANSI256_TO_ANSI16[rgb_to_ansi256(r, g, b) as usize])
                }
                other => other,
            },
            ColorDepth::Ansi256 => match self {
                Self::Rgb(r, g, b) => Self::Ansi256(rgb_to_ansi256(r, g, b)),
                other => other,
            },
            ColorDepth::TrueColor => self,
        }
    }
}

/// RGB value of a 256-palette entry using the xterm defaults
pub const fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    const ANSI16: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (205, 0, 0),
        (0, 205, 0),
        (205, 205, 0),
        (0, 0, 238),
        (205, 0, 205),
        (0, 205, 205),
        (229, 229, 229),
        (127, 127, 127),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (92, 92, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];
    const CUBE: [u8; 6] = [0, 95, 135, 175, 215, 255];

    if index < 16 {
        ANSI16[index as usize]
    } else if index < 232 {
        let i = index - 16;
        (CUBE[(i / 36) as usize], CUBE[((i / 6) % 6) as usize], CUBE[(i % 6) as usize])
    } else {
        let level = 8 + (index - 232) * 10;
        (level, level, level)
    }
}

const fn distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = a.0 as i32 - b.0 as i32;
    let dg = a.1 as i32 - b.1 as i32;
    let db = a.2 as i32 - b.2 as i32;
    (dr * dr + dg * dg + db * db) as u32
}

/// Index in `start..end` of minimum Euclidean distance; ties keep the lowest index
const fn nearest(rgb: (u8, u8, u8), start: u16, end: u16) -> u8 {
    let mut best = start;
    let mut best_distance = u32::MAX;
    let mut i = start;
    while i < end {
        let d = distance(rgb, ansi256_to_rgb(i as u8));
        if d < best_distance {
            best = i;
            best_distance = d;
        }
        i += 1;
    }
    best as u8
}

/// Nearest fixed entry (16-255) of the 256-color palette.
///
/// Entries 0-15 are skipped because terminals commonly redefine them.
pub const fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    nearest((r, g, b), 16, 256)
}

const fn build_ansi16_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = if i < 16 {
            i as u8
        } else {
            nearest(ansi256_to_rgb(i as u8), 0, 16)
        };
        i += 1;
    }
    table
}

/// Fixed 256 -> 16 color lookup table
pub const ANSI256_TO_ANSI16: [u8; 256] = build_ansi16_table();

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Default => CrosstermColor::Reset,
            Color::Ansi16(index) => match index % 16 {
                0 => CrosstermColor::Black,
                1 => CrosstermColor::DarkRed,
                2 => CrosstermColor::DarkGreen,
                3 => CrosstermColor::DarkYellow,
                4 => CrosstermColor::DarkBlue,
                5 => CrosstermColor::DarkMagenta,
                6 => CrosstermColor::DarkCyan,
                7 => CrosstermColor::Grey,
                8 => CrosstermColor::DarkGrey,
                9 => CrosstermColor::Red,
                10 => CrosstermColor::Green,
                11 => CrosstermColor::Yellow,
                12 => CrosstermColor::Blue,
                13 => CrosstermColor::Magenta,
                14 => CrosstermColor::Cyan,
                _ => CrosstermColor::White,
            },
            Color::Ansi256(index) => CrosstermColor::AnsiValue(index),
            Color::Rgb(r, g, b) => CrosstermColor::Rgb { r, g, b },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_rgb() {
        let c = Color::rgb(255, 128, 0);
        assert_eq!(c, Color::Rgb(255, 128, 0));
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#ff0000"), Some(Color::Rgb(255, 0, 0)));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(Color::from_hex("invalid"), None);
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::from_name("red"), Some(Color::RED));
        assert_eq!(Color::from_name("Bright-Blue"), Some(Color::BRIGHT_BLUE));
        assert_eq!(Color::from_name("grey"), Some(Color::GRAY));
        assert_eq!(Color::from_name("chartreuse"), None);
    }

    #[test]
    fn test_color_to_crossterm() {
        let c: CrosstermColor = Color::RED.into();
        assert_eq!(c, CrosstermColor::DarkRed);
        let c: CrosstermColor = Color::Default.into();
        assert_eq!(c, CrosstermColor::Reset);
    }

    #[test]
    fn test_depth_ordering() {
        assert!(ColorDepth::NoColor < ColorDepth::Ansi16);
        assert!(ColorDepth::Ansi16 < ColorDepth::Ansi256);
        assert!(ColorDepth::Ansi256 < ColorDepth::TrueColor);
    }

    #[test]
    fn test_palette_values() {
        assert_eq!(ansi256_to_rgb(16), (0, 0, 0));
        assert_eq!(ansi256_to_rgb(196), (255, 0, 0));
        assert_eq!(ansi256_to_rgb(231), (255, 255, 255));
        assert_eq!(ansi256_to_rgb(232), (8, 8, 8));
        assert_eq!(ansi256_to_rgb(255), (238, 238, 238));
    }

    #[test]
    fn test_downsample_exact_cube_entry() {
        assert_eq!(
            Color::rgb(255, 0, 0).downsample(ColorDepth::Ansi256),
            Color::Ansi256(196)
        );
        assert_eq!(
            Color::rgb(95, 135, 175).downsample(ColorDepth::Ansi256),
            Color::Ansi256(16 + 36 + 2 * 6 + 3)
        );
    }

    #[test]
    fn test_downsample_to_ansi16() {
        assert_eq!(Color::rgb(255, 0, 0).downsample(ColorDepth::Ansi16), Color::BRIGHT_RED);
        assert_eq!(Color::rgb(0, 0, 0).downsample(ColorDepth::Ansi16), Color::BLACK);
        assert_eq!(Color::Ansi256(21).downsample(ColorDepth::Ansi16), Color::BLUE);
    }

    #[test]
    fn test_downsample_never_upgrades() {
        assert_eq!(Color::RED.downsample(ColorDepth::TrueColor), Color::RED);
        assert_eq!(Color::Ansi256(42).downsample(ColorDepth::TrueColor), Color::Ansi256(42));
        assert_eq!(Color::Default.downsample(ColorDepth::Ansi16), Color::Default);
    }

    #[test]
    fn test_downsample_to_no_color() {
        assert_eq!(Color::rgb(1, 2, 3).downsample(ColorDepth::NoColor), Color::Default);
        assert_eq!(Color::GREEN.downsample(ColorDepth::NoColor), Color::Default);
    }

    #[test]
    fn test_ansi16_table_identity_for_low_indexes() {
        for i in 0..16u8 {
            assert_eq!(ANSI256_TO_ANSI16[i as usize], i);
        }
    }

    proptest! {
        #[test]
        fn prop_two_step_matches_direct(r: u8, g: u8, b: u8) {
            let color = Color::rgb(r, g, b);
            let two_step = color
                .downsample(ColorDepth::Ansi256)
                .downsample(ColorDepth::Ansi16);
            prop_assert_eq!(two_step, color.downsample(ColorDepth::Ansi16));
        }

        #[test]
        fn prop_downsample_is_deterministic(r: u8, g: u8, b: u8) {
            let color = Color::rgb(r, g, b);
            prop_assert_eq!(
                color.downsample(ColorDepth::Ansi256),
                color.downsample(ColorDepth::Ansi256)
            );
        }

        #[test]
        fn prop_palette_entries_round_trip(index in 16u8..=255) {
            let (r, g, b) = ansi256_to_rgb(index);
            let back = Color::rgb(r, g, b).downsample(ColorDepth::Ansi256);
            // Identical palette entries resolve to the lowest index with that value
            match back {
                Color::Ansi256(found) => prop_assert_eq!(ansi256_to_rgb(found), (r, g, b)),
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }
    }
}
