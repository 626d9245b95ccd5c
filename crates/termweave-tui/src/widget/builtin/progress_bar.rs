//! Progress bar widget

use crate::style::{Color, Line, Lines, Style};
use crate::theme::{keys, Theme};
use crate::widget::{Measurement, Renderable};

/// A horizontal bar showing `completed` out of `total`.
///
/// With no total the bar is indeterminate and drawn in the pending style,
/// optionally with a highlighted pulse sweeping across it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProgressBar {
    total: Option<u64>,
    completed: u64,
    width: Option<usize>,
    pulse: Option<f64>,
}

impl ProgressBar {
    pub fn new(total: Option<u64>, completed: u64) -> Self {
        Self {
            total,
            completed,
            width: None,
            pulse: None,
        }
    }

    /// Fixed bar width instead of filling the column
    pub fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Position of the indeterminate pulse in `0.0..1.0`
    pub fn pulse(mut self, position: f64) -> Self {
        self.pulse = Some(position.clamp(0.0, 1.0));
        self
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.total, Some(total) if self.completed >= total)
    }

    fn glyph(theme: &Theme, key: &str, default: char) -> char {
        theme.string(key, "").chars().next().unwrap_or(default)
    }
}

impl Renderable for ProgressBar {
    fn measure(&self, _theme: &Theme, width: usize) -> Measurement {
        match self.width {
            Some(w) => Measurement::fixed(w),
            None => Measurement::new(0, width),
        }
    }

    fn render(&self, theme: &Theme, width: usize) -> Lines {
        let bar_width = self.width.map_or(width, |w| w.min(width));
        let style = |key, default| theme.resolve(key, None, default, Style::new());
        let complete = style(keys::PROGRESSBAR_COMPLETE, Style::new().fg(Color::MAGENTA));
        let incomplete = style(keys::PROGRESSBAR_INCOMPLETE, Style::new().dim());
        let finished = style(keys::PROGRESSBAR_FINISHED, Style::new().fg(Color::GREEN));
        let pending = style(keys::PROGRESSBAR_PENDING, Style::new().dim());

        let complete_char = Self::glyph(theme, keys::PROGRESSBAR_COMPLETE, '━');
        let incomplete_char = Self::glyph(theme, keys::PROGRESSBAR_INCOMPLETE, '━');
        let separator_char = Self::glyph(theme, keys::PROGRESSBAR_SEPARATOR, '╺');
        let pending_char = Self::glyph(theme, keys::PROGRESSBAR_PENDING, '━');

        let mut line = Line::empty();
        match self.total {
            None => {
                let segment = (bar_width / 4).max(1);
                let start = self.pulse.map(|p| {
                    let travel = (bar_width + segment) as f64;
                    (p * travel) as isize - segment as isize
                });
                let segment = segment as isize;
                for i in 0..bar_width as isize {
                    let lit = start.is_some_and(|s| i >= s && i < s + segment);
                    line.push_char(pending_char, if lit { complete } else { pending });
                }
            }
            Some(_) if self.is_finished() => {
                line.push_str(&complete_char.to_string().repeat(bar_width), finished);
            }
            Some(total) => {
                let fraction = self.completed as f64 / total as f64;
                let done = ((fraction * bar_width as f64).floor() as usize).min(bar_width);
                line.push_str(&complete_char.to_string().repeat(done), complete);
                if done < bar_width {
                    if done > 0 {
                        line.push_char(separator_char, incomplete);
                    } else {
                        line.push_char(incomplete_char, incomplete);
                    }
                    let rest = bar_width - done - 1;
                    line.push_str(&incomplete_char.to_string().repeat(rest), incomplete);
                }
            }
        }

        Lines::from_lines(vec![line.fit(width, Style::new())])
    }
}
