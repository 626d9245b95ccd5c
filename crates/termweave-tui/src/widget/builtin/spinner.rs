//! Spinner widget: one frame of a looping animation

use crate::style::{str_width, Line, Lines, Style};
use crate::theme::{keys, Theme};
use crate::widget::{Measurement, Renderable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spinner {
    frames: Vec<String>,
    frame: usize,
    style: Option<Style>,
}

impl Spinner {
    pub const DOTS: &'static [&'static str] =
        &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    pub const LINES: &'static [&'static str] = &["|", "/", "-", "\\"];

    pub fn new<I, S>(frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frames: frames.into_iter().map(Into::into).collect(),
            frame: 0,
            style: None,
        }
    }

    pub fn dots() -> Self {
        Self::new(Self::DOTS.iter().copied())
    }

    pub fn lines() -> Self {
        Self::new(Self::LINES.iter().copied())
    }

    /// Select the frame to show; wraps around the frame list
    pub fn frame(mut self, frame: usize) -> Self {
        self.frame = frame;
        self
    }

    /// Overrides the theme's `spinner` style
    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn current(&self) -> &str {
        if self.frames.is_empty() {
            return "";
        }
        &self.frames[self.frame % self.frames.len()]
    }
}

impl Default for Spinner {
    fn default() -> Self {
        Self::dots()
    }
}

impl Renderable for Spinner {
    fn measure(&self, _theme: &Theme, _width: usize) -> Measurement {
        let widest = self.frames.iter().map(|f| str_width(f)).max().unwrap_or(0);
        Measurement::fixed(widest)
    }

    fn render(&self, theme: &Theme, width: usize) -> Lines {
        let style = theme.resolve(keys::SPINNER, self.style, Style::new(), Style::new());
        Lines::from_lines(vec![Line::styled(self.current(), style).fit(width, Style::new())])
    }
}
