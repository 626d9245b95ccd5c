//! Vertical stack of widgets sharing one width

use crate::style::{Line, Lines, Style};
use crate::theme::Theme;
use crate::widget::{Measurement, Renderable, Widget};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stack {
    children: Vec<Widget>,
    spacing: usize,
}

impl Stack {
    pub fn new<I, W>(children: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Widget>,
    {
        Self {
            children: children.into_iter().map(Into::into).collect(),
            spacing: 0,
        }
    }

    /// Blank lines between children
    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn push(&mut self, child: impl Into<Widget>) {
        self.children.push(child.into());
    }

    pub fn children(&self) -> &[Widget] {
        &self.children
    }
}

impl Renderable for Stack {
    fn measure(&self, theme: &Theme, width: usize) -> Measurement {
        self.children
            .iter()
            .map(|child| child.measure(theme, width))
            .fold(Measurement::default(), Measurement::union)
    }

    fn render(&self, theme: &Theme, width: usize) -> Lines {
        let mut lines = Lines::empty();
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                lines.pad_to_height(lines.height() + self.spacing, width, Style::new());
            }
            for line in child.render(theme, width) {
                lines.push(line.fit(width, Style::new()));
            }
        }
        lines
    }
}

impl FromIterator<Widget> for Stack {
    fn from_iter<I: IntoIterator<Item = Widget>>(iter: I) -> Self {
        Self::new(iter)
    }
}
