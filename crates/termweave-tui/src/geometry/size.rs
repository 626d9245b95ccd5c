//! Terminal dimensions

/// Terminal size in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// 80x24, used when the terminal does not report a size
    pub const fn fallback() -> Self {
        Self::new(80, 24)
    }

    /// `None` for the 0x0 some platforms report when the size is unknown
    pub const fn reported(width: u16, height: u16) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self::new(width, height))
        }
    }

    /// Size from `COLUMNS`/`LINES`; a missing height takes the fallback's
    pub fn from_columns_lines(columns: Option<u16>, lines: Option<u16>) -> Option<Self> {
        let width = columns.filter(|w| *w > 0)?;
        let height = lines.filter(|h| *h > 0).unwrap_or(Self::fallback().height);
        Some(Self::new(width, height))
    }
}

impl From<(u16, u16)> for Size {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}
