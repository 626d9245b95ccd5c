//! Inner spacing around widget content

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }

    pub const fn all(n: usize) -> Self {
        Self::new(n, n, n, n)
    }

    /// `vertical` above and below, `horizontal` left and right
    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }

    pub const fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}
