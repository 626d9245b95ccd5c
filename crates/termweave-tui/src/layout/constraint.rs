//! Column width policies

/// How a column claims horizontal space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnWidth {
    /// Exactly this many cells
    Fixed(usize),
    /// As wide as the content wants, shrinking toward its minimum if needed
    Auto,
    /// A share of the leftover space proportional to the weight
    Weighted(u16),
    /// All leftover space; the same as `Weighted(1)`
    Expand,
}

impl ColumnWidth {
    pub const fn fixed(n: usize) -> Self {
        Self::Fixed(n)
    }

    pub const fn weighted(weight: u16) -> Self {
        Self::Weighted(weight)
    }

    /// Check if this column takes a share of leftover space
    pub fn is_flexible(&self) -> bool {
        matches!(self, Self::Weighted(_) | Self::Expand)
    }

    /// Weight used when distributing leftover space, 0 for rigid columns
    pub fn weight(&self) -> u32 {
        match self {
            Self::Weighted(w) => u32::from(*w),
            Self::Expand => 1,
            _ => 0,
        }
    }
}

impl Default for ColumnWidth {
    fn default() -> Self {
        Self::Auto
    }
}
