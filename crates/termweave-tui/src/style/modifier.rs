//! Text attributes (bold, italic, underline, etc.)

use crossterm::style::Attribute;
use std::ops::{BitOr, BitOrAssign};

/// Text attributes as a bitfield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Modifier(u16);

impl Modifier {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1 << 0);
    pub const DIM: Self = Self(1 << 1);
    pub const ITALIC: Self = Self(1 << 2);
    pub const UNDERLINE: Self = Self(1 << 3);
    pub const BLINK: Self = Self(1 << 4);
    /// Swap foreground and background
    pub const REVERSE: Self = Self(1 << 5);
    pub const STRIKETHROUGH: Self = Self(1 << 6);
    pub const HIDDEN: Self = Self(1 << 7);

    const NAMED: [(&'static str, Modifier); 8] = [
        ("bold", Self::BOLD),
        ("dim", Self::DIM),
        ("italic", Self::ITALIC),
        ("underline", Self::UNDERLINE),
        ("blink", Self::BLINK),
        ("reverse", Self::REVERSE),
        ("strikethrough", Self::STRIKETHROUGH),
        ("hidden", Self::HIDDEN),
    ];

    pub const fn empty() -> Self {
        Self::NONE
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Check if every attribute in `other` is set
    pub const fn contains(&self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Look up a single attribute by name (`bold`, `underline`, ...)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        let name = match name.as_str() {
            "underlined" => "underline",
            "reversed" | "inverse" => "reverse",
            "crossed_out" | "strike" => "strikethrough",
            "faint" => "dim",
            other => other,
        };
        Self::NAMED
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, modifier)| *modifier)
    }

    /// Names of the attributes set, in a stable order
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, modifier)| self.contains(*modifier))
            .map(|(name, _)| *name)
            .collect()
    }

    /// SGR attributes that switch these modifiers on
    pub fn attributes(&self) -> Vec<Attribute> {
        let mut attrs = Vec::new();
        if self.contains(Self::BOLD) {
            attrs.push(Attribute::Bold);
        }
        if self.contains(Self::DIM) {
            attrs.push(Attribute::Dim);
        }
        if self.contains(Self::ITALIC) {
            attrs.push(Attribute::Italic);
        }
        if self.contains(Self::UNDERLINE) {
            attrs.push(Attribute::Underlined);
        }
        if self.contains(Self::BLINK) {
            attrs.push(Attribute::SlowBlink);
        }
        if self.contains(Self::REVERSE) {
            attrs.push(Attribute::Reverse);
        }
        if self.contains(Self::STRIKETHROUGH) {
            attrs.push(Attribute::CrossedOut);
        }
        if self.contains(Self::HIDDEN) {
            attrs.push(Attribute::Hidden);
        }
        attrs
    }
}

impl BitOr for Modifier {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Modifier {
    fn bitor_assign(&mut self, rhs: Self) {
        self.insert(rhs);
    }
}
