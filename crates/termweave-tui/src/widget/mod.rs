//! Widgets: measurable, renderable units of styled output

pub mod builtin;
mod traits;

pub use builtin::{
    BorderType, Column, Panel, ProgressBar, Row, Spinner, Stack, Table, Text, Whitespace,
};
pub use traits::{Measurement, Renderable};

use crate::style::{Line, Lines};
use crate::theme::Theme;

/// Any widget this crate knows how to lay out
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Widget {
    /// Renders nothing
    #[default]
    Empty,
    Text(Text),
    Panel(Box<Panel>),
    Table(Box<Table>),
    Stack(Stack),
    ProgressBar(ProgressBar),
    Spinner(Spinner),
}

impl Renderable for Widget {
    fn measure(&self, theme: &Theme, width: usize) -> Measurement {
        match self {
            Widget::Empty => Measurement::default(),
            Widget::Text(w) => w.measure(theme, width),
            Widget::Panel(w) => w.measure(theme, width),
            Widget::Table(w) => w.measure(theme, width),
            Widget::Stack(w) => w.measure(theme, width),
            Widget::ProgressBar(w) => w.measure(theme, width),
            Widget::Spinner(w) => w.measure(theme, width),
        }
    }

    fn render(&self, theme: &Theme, width: usize) -> Lines {
        match self {
            Widget::Empty => Lines::empty(),
            Widget::Text(w) => w.render(theme, width),
            Widget::Panel(w) => w.render(theme, width),
            Widget::Table(w) => w.render(theme, width),
            Widget::Stack(w) => w.render(theme, width),
            Widget::ProgressBar(w) => w.render(theme, width),
            Widget::Spinner(w) => w.render(theme, width),
        }
    }
}

impl From<Text> for Widget {
    fn from(w: Text) -> Self {
        Widget::Text(w)
    }
}

impl From<Panel> for Widget {
    fn from(w: Panel) -> Self {
        Widget::Panel(Box::new(w))
    }
}

impl From<Table> for Widget {
    fn from(w: Table) -> Self {
        Widget::Table(Box::new(w))
    }
}

impl From<Stack> for Widget {
    fn from(w: Stack) -> Self {
        Widget::Stack(w)
    }
}

impl From<ProgressBar> for Widget {
    fn from(w: ProgressBar) -> Self {
        Widget::ProgressBar(w)
    }
}

impl From<Spinner> for Widget {
    fn from(w: Spinner) -> Self {
        Widget::Spinner(w)
    }
}

impl From<&str> for Widget {
    fn from(s: &str) -> Self {
        Widget::Text(Text::new(s))
    }
}

impl From<String> for Widget {
    fn from(s: String) -> Self {
        Widget::Text(Text::new(s))
    }
}

impl From<Line> for Widget {
    fn from(line: Line) -> Self {
        Widget::Text(Text::from_line(line))
    }
}

/// Render a widget at the width it asks for, capped at `available`
pub fn render<W: Renderable + ?Sized>(widget: &W, theme: &Theme, available: usize) -> Lines {
    let measurement = widget.measure(theme, available);
    widget.render(theme, measurement.max.min(available))
}
