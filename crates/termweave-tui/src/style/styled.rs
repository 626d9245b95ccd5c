//! Styled text types: Span, Line, and Lines

use super::text_utils::{char_width, str_width};
use super::Style;

/// A run of text in a single style
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    pub fn raw<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
            style: Style::default(),
        }
    }

    pub fn styled<S: Into<String>>(content: S, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }

    /// Display width in terminal cells
    pub fn width(&self) -> usize {
        str_width(&self.content)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl<S: Into<String>> From<S> for Span {
    fn from(s: S) -> Self {
        Self::raw(s)
    }
}

/// One rendered row of styled text
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn empty() -> Self {
        Self { spans: Vec::new() }
    }

    pub fn raw<S: Into<String>>(content: S) -> Self {
        Self {
            spans: vec![Span::raw(content)],
        }
    }

    pub fn styled<S: Into<String>>(content: S, style: Style) -> Self {
        Self {
            spans: vec![Span::styled(content, style)],
        }
    }

    /// `width` spaces in `style`
    pub fn blank(width: usize, style: Style) -> Self {
        let mut line = Self::empty();
        line.push_str(&" ".repeat(width), style);
        line
    }

    pub fn from_spans<I: IntoIterator<Item = Span>>(spans: I) -> Self {
        Self {
            spans: spans.into_iter().collect(),
        }
    }

    /// Total display width in terminal cells
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| s.width()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(|s| s.is_empty())
    }

    pub fn push(&mut self, span: Span) {
        if span.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == span.style => last.content.push_str(&span.content),
            _ => self.spans.push(span),
        }
    }

    pub fn push_str(&mut self, content: &str, style: Style) {
        self.push(Span::styled(content, style));
    }

    pub fn push_char(&mut self, c: char, style: Style) {
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.content.push(c),
            _ => self.spans.push(Span::styled(c.to_string(), style)),
        }
    }

    /// Append every span of `other`
    pub fn extend(&mut self, other: Line) {
        for span in other.spans {
            self.push(span);
        }
    }

    /// Use `style` as the base for every span; span styles still win
    pub fn style(mut self, style: Style) -> Self {
        for span in &mut self.spans {
            span.style = style.patch(span.style);
        }
        self
    }

    /// Iterate over characters with their styles
    pub fn styled_chars(&self) -> impl Iterator<Item = (char, Style)> + '_ {
        self.spans
            .iter()
            .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
    }

    /// Plain text without styles
    pub fn plain(&self) -> String {
        self.spans.iter().map(|s| s.content.as_str()).collect()
    }

    /// Cut the line to at most `width` cells.
    ///
    /// A wide character straddling the boundary is replaced by a space so
    /// the result never splits a glyph.
    pub fn truncate(self, width: usize) -> Self {
        if self.width() <= width {
            return self;
        }
        let mut out = Self::empty();
        let mut used = 0;
        for (c, style) in self.styled_chars() {
            let w = char_width(c);
            if used + w > width {
                if used < width {
                    out.push_str(&" ".repeat(width - used), style.background());
                }
                break;
            }
            out.push_char(c, style);
            used += w;
        }
        out
    }

    /// Cut the line to `width` cells, marking the cut with an ellipsis
    pub fn truncate_with_ellipsis(self, width: usize) -> Self {
        if self.width() <= width {
            return self;
        }
        if width == 0 {
            return Self::empty();
        }
        let ellipsis_style = self
            .spans
            .last()
            .map(|s| s.style)
            .unwrap_or_default();
        let mut out = self.truncate(width - 1);
        out.push_char('…', ellipsis_style);
        out.fit(width, Style::new())
    }

    pub fn pad_left(self, n: usize, style: Style) -> Self {
        if n == 0 {
            return self;
        }
        let mut out = Self::blank(n, style);
        out.extend(self);
        out
    }

    pub fn pad_right(mut self, n: usize, style: Style) -> Self {
        if n > 0 {
            self.push_str(&" ".repeat(n), style);
        }
        self
    }

    /// Truncate or right-pad so the line is exactly `width` cells
    pub fn fit(self, width: usize, pad_style: Style) -> Self {
        let line = self.truncate(width);
        let missing = width.saturating_sub(line.width());
        line.pad_right(missing, pad_style)
    }
}

impl<S: Into<String>> From<S> for Line {
    fn from(s: S) -> Self {
        Self::raw(s)
    }
}

impl FromIterator<Span> for Line {
    fn from_iter<I: IntoIterator<Item = Span>>(iter: I) -> Self {
        Self::from_spans(iter)
    }
}

/// Rendered output of a widget: a vertical list of styled lines
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Lines {
    pub lines: Vec<Line>,
}

impl Lines {
    pub fn empty() -> Self {
        Self { lines: Vec::new() }
    }

    pub fn from_lines<I: IntoIterator<Item = Line>>(lines: I) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line
    pub fn width(&self) -> usize {
        self.lines.iter().map(|l| l.width()).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Append blank lines until the block is `height` lines tall
    pub fn pad_to_height(&mut self, height: usize, width: usize, style: Style) {
        while self.lines.len() < height {
            self.lines.push(Line::blank(width, style));
        }
    }

    /// Plain text of every line, joined by newlines
    pub fn plain(&self) -> String {
        self.lines
            .iter()
            .map(Line::plain)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<Line> for Lines {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

impl IntoIterator for Lines {
    type Item = Line;
    type IntoIter = std::vec::IntoIter<Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_span_width() {
        assert_eq!(Span::raw("hello").width(), 5);
        assert_eq!(Span::raw("日本語").width(), 6);
    }

    #[test]
    fn test_line_push_merges_same_style() {
        let mut line = Line::empty();
        line.push_str("ab", Style::new());
        line.push_str("cd", Style::new());
        line.push_str("ef", Style::new().bold());
        assert_eq!(line.spans.len(), 2);
        assert_eq!(line.spans[0].content, "abcd");
    }

    #[test]
    fn test_line_style_is_base() {
        let line = Line::from_spans(vec![
            Span::raw("a"),
            Span::styled("b", Style::new().fg(Color::BLUE)),
        ])
        .style(Style::new().fg(Color::RED));
        assert_eq!(line.spans[0].style.fg, Some(Color::RED));
        assert_eq!(line.spans[1].style.fg, Some(Color::BLUE));
    }

    #[test]
    fn test_truncate_keeps_styles() {
        let line = Line::from_spans(vec![
            Span::styled("ab", Style::new().fg(Color::RED)),
            Span::styled("cd", Style::new().fg(Color::BLUE)),
        ])
        .truncate(3);
        assert_eq!(line.plain(), "abc");
        assert_eq!(line.spans[1].style.fg, Some(Color::BLUE));
    }

    #[test]
    fn test_truncate_wide_char_boundary() {
        let line = Line::raw("a日本").truncate(4);
        assert_eq!(line.plain(), "a日 ");
        assert_eq!(line.width(), 4);
    }

    #[test]
    fn test_fit_pads_and_cuts() {
        assert_eq!(Line::raw("ab").fit(4, Style::new()).plain(), "ab  ");
        assert_eq!(Line::raw("abcdef").fit(4, Style::new()).plain(), "abcd");
    }

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(Line::raw("a title").truncate_with_ellipsis(4).plain(), "a t…");
    }

    #[test]
    fn test_lines_pad_to_height() {
        let mut lines = Lines::from_lines(vec![Line::raw("x")]);
        lines.pad_to_height(3, 1, Style::new());
        assert_eq!(lines.height(), 3);
        assert_eq!(lines.plain(), "x\n \n ");
    }
}
