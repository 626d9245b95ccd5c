//! Panel widget: content wrapped in an optional border with titles

use super::border::BorderType;
use crate::layout::{Alignment, Padding};
use crate::style::{Line, Lines, Style};
use crate::theme::{keys, Theme};
use crate::widget::{Measurement, Renderable, Widget};

/// Content surrounded by a border, with optional top and bottom titles
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    content: Widget,
    title: Option<Line>,
    title_align: Alignment,
    bottom_title: Option<Line>,
    bottom_title_align: Alignment,
    expand: bool,
    border: Option<BorderType>,
    border_style: Option<Style>,
    padding: Padding,
}

impl Panel {
    /// Rounded border, no titles, shrink-wrapped around the content
    pub fn new(content: impl Into<Widget>) -> Self {
        Self {
            content: content.into(),
            title: None,
            title_align: Alignment::Center,
            bottom_title: None,
            bottom_title_align: Alignment::Center,
            expand: false,
            border: Some(BorderType::Rounded),
            border_style: None,
            padding: Padding::zero(),
        }
    }

    pub fn title(mut self, title: impl Into<Line>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title_align(mut self, align: Alignment) -> Self {
        self.title_align = align;
        self
    }

    pub fn bottom_title(mut self, title: impl Into<Line>) -> Self {
        self.bottom_title = Some(title.into());
        self
    }

    pub fn bottom_title_align(mut self, align: Alignment) -> Self {
        self.bottom_title_align = align;
        self
    }

    /// Fill the whole available width
    pub fn expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Border glyphs, or `None` for no border at all
    pub fn border(mut self, border: Option<BorderType>) -> Self {
        self.border = border;
        self
    }

    /// Overrides the theme's `panel.border` style
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = Some(style);
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    fn border_width(&self) -> usize {
        if self.border.is_some() {
            2
        } else {
            0
        }
    }

    /// Width the widest title needs inside the border
    fn title_width(&self, theme: &Theme) -> usize {
        let padding = theme.dimension_usize(keys::PANEL_TITLE_PADDING, 1);
        [&self.title, &self.bottom_title]
            .into_iter()
            .flatten()
            .map(|title| title.width() + 2 * padding)
            .max()
            .unwrap_or(0)
    }

    fn border_row(
        &self,
        theme: &Theme,
        (left, fill, right): (char, char, char),
        title: Option<&Line>,
        align: Alignment,
        inner: usize,
        border_style: Style,
    ) -> Line {
        let mut line = Line::empty();
        line.push_char(left, border_style);

        match title {
            None => line.push_str(&fill.to_string().repeat(inner), border_style),
            Some(title) => {
                let title_padding = theme
                    .dimension_usize(keys::PANEL_TITLE_PADDING, 1)
                    .min(inner / 2);
                let title_style =
                    theme.resolve(keys::PANEL_TITLE, None, Style::new(), border_style);
                let title = title
                    .clone()
                    .style(title_style)
                    .truncate_with_ellipsis(inner - 2 * title_padding);
                let slack = (inner - 2 * title_padding).saturating_sub(title.width());
                let (before, after) = match align {
                    Alignment::Center => (slack / 2, slack - slack / 2),
                    Alignment::Right => (slack - slack.min(1), slack.min(1)),
                    Alignment::None | Alignment::Left | Alignment::Justify => {
                        (slack.min(1), slack - slack.min(1))
                    }
                };
                let gap = " ".repeat(title_padding);
                line.push_str(&fill.to_string().repeat(before), border_style);
                line.push_str(&gap, border_style);
                line.extend(title);
                line.push_str(&gap, border_style);
                line.push_str(&fill.to_string().repeat(after), border_style);
            }
        }

        line.push_char(right, border_style);
        line
    }
}

impl Renderable for Panel {
    fn measure(&self, theme: &Theme, width: usize) -> Measurement {
        let chrome = self.border_width() + self.padding.horizontal();
        let content = self.content.measure(theme, width.saturating_sub(chrome));
        let title = self.title_width(theme) + self.border_width();

        let min = (content.min + chrome).max(title);
        let max = if self.expand {
            width
        } else {
            (content.max + chrome).max(title)
        };
        Measurement::new(min, max)
    }

    fn render(&self, theme: &Theme, width: usize) -> Lines {
        let inner = width.saturating_sub(self.border_width());
        let content_width = inner.saturating_sub(self.padding.horizontal());

        let mut body = Lines::empty();
        body.pad_to_height(self.padding.top, inner, Style::new());
        for line in self.content.render(theme, content_width) {
            body.push(
                line.fit(content_width, Style::new())
                    .pad_left(self.padding.left, Style::new())
                    .pad_right(self.padding.right, Style::new())
                    .fit(inner, Style::new()),
            );
        }
        body.pad_to_height(body.height() + self.padding.bottom, inner, Style::new());

        let Some(border) = self.border else {
            return body;
        };

        let chars = border.chars();
        let border_style =
            theme.resolve(keys::PANEL_BORDER, self.border_style, Style::new(), Style::new());

        let mut lines = Lines::empty();
        lines.push(self.border_row(
            theme,
            (chars.top_left, chars.horizontal, chars.top_right),
            self.title.as_ref(),
            self.title_align,
            inner,
            border_style,
        ));
        for line in body {
            let mut row = Line::empty();
            row.push_char(chars.vertical, border_style);
            row.extend(line);
            row.push_char(chars.vertical, border_style);
            lines.push(row);
        }
        lines.push(self.border_row(
            theme,
            (chars.bottom_left, chars.horizontal, chars.bottom_right),
            self.bottom_title.as_ref(),
            self.bottom_title_align,
            inner,
            border_style,
        ));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Span};
    use crate::widget::builtin::{Text, Whitespace};
    use crate::widget::render;

    fn plain(panel: &Panel, theme: &Theme, width: usize) -> Vec<String> {
        render(panel, theme, width)
            .lines
            .iter()
            .map(Line::plain)
            .collect()
    }

    #[test]
    fn test_shrink_wraps_content() {
        let panel = Panel::new(Text::new("text"));
        assert_eq!(
            plain(&panel, &Theme::empty(), 20),
            vec!["╭────╮", "│text│", "╰────╯"]
        );
    }

    #[test]
    fn test_expand_fills_width() {
        let panel = Panel::new(Text::new("text").align(Alignment::Center)).expand(true);
        assert_eq!(
            plain(&panel, &Theme::empty(), 20),
            vec![
                "╭──────────────────╮",
                "│       text       │",
                "╰──────────────────╯",
            ]
        );
    }

    #[test]
    fn test_no_border() {
        let panel = Panel::new(Text::new("text\nline 2").whitespace(Whitespace::Pre)).border(None);
        assert_eq!(plain(&panel, &Theme::empty(), 20), vec!["text  ", "line 2"]);
    }

    #[test]
    fn test_title_alignments() {
        let theme = Theme::empty();
        let centered = Panel::new(Text::new("text content")).title("title");
        assert_eq!(
            plain(&centered, &theme, 20),
            vec!["╭── title ───╮", "│text content│", "╰────────────╯"]
        );

        let left = centered.clone().title_align(Alignment::Left);
        assert_eq!(plain(&left, &theme, 20)[0], "╭─ title ────╮");

        let right = centered.title_align(Alignment::Right);
        assert_eq!(plain(&right, &theme, 20)[0], "╭──── title ─╮");
    }

    #[test]
    fn test_title_wider_than_content() {
        let panel = Panel::new(Text::new("content")).title("title title");
        assert_eq!(
            plain(&panel, &Theme::empty(), 20),
            vec!["╭ title title ╮", "│content      │", "╰─────────────╯"]
        );
    }

    #[test]
    fn test_bottom_title() {
        let panel = Panel::new(Text::new("text content")).bottom_title("end");
        assert_eq!(plain(&panel, &Theme::empty(), 20)[2], "╰─── end ────╯");
    }

    #[test]
    fn test_padding() {
        let panel = Panel::new(Text::new("x")).padding(Padding::symmetric(1, 2));
        assert_eq!(
            plain(&panel, &Theme::empty(), 20),
            vec!["╭─────╮", "│     │", "│  x  │", "│     │", "╰─────╯"]
        );
    }

    #[test]
    fn test_ascii_border() {
        let panel = Panel::new(Text::new("ab")).border(Some(BorderType::Ascii));
        assert_eq!(plain(&panel, &Theme::empty(), 20), vec!["+--+", "|ab|", "+--+"]);
    }

    #[test]
    fn test_title_truncated_when_narrow() {
        let panel = Panel::new(Text::new("a")).title("a long title");
        let lines = panel.render(&Theme::empty(), 8);
        assert_eq!(lines.lines[0].plain(), "╭ a l… ╮");
        assert!(lines.lines.iter().all(|l| l.width() == 8));
    }

    #[test]
    fn test_themed_panel() {
        let red = Style::new().fg(Color::RED);
        let blue = Style::new().fg(Color::BLUE);
        let green = Style::new().fg(Color::GREEN);
        let theme = Theme::empty()
            .with_style(keys::PANEL_BORDER, red)
            .with_dimension(keys::PANEL_TITLE_PADDING, 0);

        let panel = Panel::new(Text::styled("text content", green))
            .title(Line::from_spans(vec![Span::styled("title", blue)]));
        let lines = render(&panel, &theme, 20);

        let top = &lines.lines[0];
        assert_eq!(top.plain(), "╭───title────╮");
        assert_eq!(top.spans[0], Span::styled("╭───", red));
        assert_eq!(top.spans[1], Span::styled("title", blue));
        assert_eq!(top.spans[2], Span::styled("────╮", red));

        let middle = &lines.lines[1];
        assert_eq!(middle.spans[0], Span::styled("│", red));
        assert_eq!(middle.spans[1], Span::styled("text content", green));
        assert_eq!(middle.spans[2], Span::styled("│", red));
    }
}
