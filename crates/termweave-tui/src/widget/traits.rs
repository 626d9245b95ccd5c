//! Core widget traits

use crate::style::Lines;
use crate::theme::Theme;

/// Width range a widget can be rendered at
///
/// `min` is the narrowest width the widget renders without losing content
/// it cannot wrap; `max` is the widest it would ever use. `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Measurement {
    pub min: usize,
    pub max: usize,
}

impl Measurement {
    /// Build a measurement, raising `max` to `min` if needed
    pub const fn new(min: usize, max: usize) -> Self {
        Self {
            min,
            max: if max < min { min } else { max },
        }
    }

    /// Widget that always wants exactly `width` cells
    pub const fn fixed(width: usize) -> Self {
        Self::new(width, width)
    }

    /// Grow both bounds by `amount`, used for borders and padding
    pub const fn grow(self, amount: usize) -> Self {
        Self::new(self.min + amount, self.max + amount)
    }

    /// Combine two measurements of widgets sharing a width (stacked)
    pub fn union(self, other: Self) -> Self {
        Self::new(self.min.max(other.min), self.max.max(other.max))
    }
}

/// Measure and render
///
/// Both operations are pure functions of the widget, the theme and the
/// width. `render(width)` returns lines exactly `width` cells wide whenever
/// `width >= measure(..).min`.
pub trait Renderable {
    fn measure(&self, theme: &Theme, width: usize) -> Measurement;

    fn render(&self, theme: &Theme, width: usize) -> Lines;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Line;

    struct Fixed(&'static str);

    impl Renderable for Fixed {
        fn measure(&self, _theme: &Theme, _width: usize) -> Measurement {
            Measurement::fixed(self.0.len())
        }

        fn render(&self, _theme: &Theme, width: usize) -> Lines {
            Lines::from_lines(vec![Line::raw(self.0).fit(width, Default::default())])
        }
    }

    #[test]
    fn test_measurement_never_inverted() {
        let m = Measurement::new(5, 2);
        assert_eq!(m, Measurement::new(5, 5));
        assert_eq!(Measurement::new(1, 3).grow(2), Measurement::new(3, 5));
        assert_eq!(
            Measurement::new(1, 9).union(Measurement::new(4, 6)),
            Measurement::new(4, 9)
        );
    }

    #[test]
    fn test_custom_renderable() {
        let theme = Theme::empty();
        let w = Fixed("abc");
        assert_eq!(w.measure(&theme, 10), Measurement::fixed(3));
        assert_eq!(w.render(&theme, 5).plain(), "abc  ");
    }
}
