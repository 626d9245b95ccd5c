//! Text widget: wrapping, whitespace handling and alignment

use crate::layout::Alignment;
use crate::style::{char_width, Line, Lines, Span, Style};
use crate::theme::Theme;
use crate::widget::{Measurement, Renderable};

const TAB_WIDTH: usize = 8;

/// How whitespace and line breaks in the source are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Whitespace {
    /// Collapse runs of whitespace, newlines included, and wrap
    #[default]
    Normal,
    /// Collapse whitespace but never wrap
    NoWrap,
    /// Keep whitespace and newlines; never wrap
    Pre,
    /// Keep whitespace and newlines; wrap
    PreWrap,
    /// Collapse spaces, keep newlines, wrap
    PreLine,
}

impl Whitespace {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "normal" => Some(Self::Normal),
            "nowrap" => Some(Self::NoWrap),
            "pre" => Some(Self::Pre),
            "prewrap" => Some(Self::PreWrap),
            "preline" => Some(Self::PreLine),
            _ => None,
        }
    }

    fn collapses_spaces(self) -> bool {
        matches!(self, Self::Normal | Self::NoWrap | Self::PreLine)
    }

    fn keeps_newlines(self) -> bool {
        matches!(self, Self::Pre | Self::PreWrap | Self::PreLine)
    }

    fn wraps(self) -> bool {
        matches!(self, Self::Normal | Self::PreWrap | Self::PreLine)
    }
}

type StyledChar = (char, Style);

#[derive(Debug, Clone)]
enum Token {
    Word(Vec<StyledChar>),
    Space(Vec<StyledChar>),
}

impl Token {
    fn chars(&self) -> &[StyledChar] {
        match self {
            Token::Word(chars) | Token::Space(chars) => chars,
        }
    }

    fn width(&self) -> usize {
        self.chars().iter().map(|(c, _)| char_width(*c)).sum()
    }

    fn is_space(&self) -> bool {
        matches!(self, Token::Space(_))
    }
}

/// Styled, wrappable text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Text {
    spans: Vec<Span>,
    style: Style,
    whitespace: Whitespace,
    align: Alignment,
}

impl Text {
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self::from_spans(vec![Span::raw(content)])
    }

    /// Text whose every character carries `style`
    pub fn styled<S: Into<String>>(content: S, style: Style) -> Self {
        Self::from_spans(vec![Span::styled(content, style)])
    }

    pub fn from_line(line: Line) -> Self {
        Self::from_spans(line.spans)
    }

    pub fn from_spans<I: IntoIterator<Item = Span>>(spans: I) -> Self {
        Self {
            spans: spans.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Base style; span styles win over it
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn whitespace(mut self, whitespace: Whitespace) -> Self {
        self.whitespace = whitespace;
        self
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(Span::is_empty)
    }

    fn paragraphs(&self) -> Vec<Vec<StyledChar>> {
        let keep_newlines = self.whitespace.keeps_newlines();
        let mut paragraphs = vec![Vec::new()];
        for span in &self.spans {
            for c in span.content.chars() {
                match c {
                    '\r' => {}
                    '\n' if keep_newlines => paragraphs.push(Vec::new()),
                    '\n' => push_char(&mut paragraphs, ' ', span.style),
                    _ => push_char(&mut paragraphs, c, span.style),
                }
            }
        }
        paragraphs
    }

    fn tokenize(&self, paragraph: &[StyledChar]) -> Vec<Token> {
        let collapse = self.whitespace.collapses_spaces();
        let mut tokens: Vec<Token> = Vec::new();
        let mut column = 0;

        for &(c, style) in paragraph {
            if c.is_whitespace() && c != '\u{a0}' {
                let run = if c == '\t' && !collapse {
                    TAB_WIDTH - column % TAB_WIDTH
                } else {
                    1
                };
                match tokens.last_mut() {
                    Some(Token::Space(_)) if collapse => continue,
                    Some(Token::Space(chars)) => {
                        chars.extend(std::iter::repeat((' ', style)).take(run))
                    }
                    _ => tokens.push(Token::Space(vec![(' ', style); run])),
                }
                column += run;
            } else {
                match tokens.last_mut() {
                    Some(Token::Word(chars)) => chars.push((c, style)),
                    _ => tokens.push(Token::Word(vec![(c, style)])),
                }
                column += char_width(c);
            }
        }

        if collapse {
            if tokens.first().is_some_and(Token::is_space) {
                tokens.remove(0);
            }
            if tokens.last().is_some_and(Token::is_space) {
                tokens.pop();
            }
        }
        tokens
    }

    /// Greedy line filling; a word is broken only when it alone overflows
    fn wrap(tokens: Vec<Token>, width: usize) -> Vec<Vec<Token>> {
        let mut rows = Vec::new();
        let mut row: Vec<Token> = Vec::new();
        let mut row_width = 0;
        let mut pending: Option<Token> = None;

        for token in tokens {
            if token.is_space() {
                pending = Some(token);
                continue;
            }

            let space_width = pending.as_ref().map_or(0, Token::width);
            let word_width = token.width();
            if row_width + space_width + word_width <= width {
                if let Some(space) = pending.take() {
                    row.push(space);
                }
                row.push(token);
                row_width += space_width + word_width;
                continue;
            }

            pending = None;
            if !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }

            if word_width <= width {
                row.push(token);
                row_width = word_width;
            } else {
                let mut chunks = split_word(token.chars(), width);
                if let Some(last) = chunks.pop() {
                    rows.extend(chunks.into_iter().map(|chunk| vec![Token::Word(chunk)]));
                    let last = Token::Word(last);
                    row_width = last.width();
                    row.push(last);
                }
            }
        }

        if let Some(space) = pending {
            if row_width + space.width() <= width {
                row.push(space);
            }
        }
        rows.push(row);
        rows
    }

    fn justify(row: &mut [Token], width: usize) {
        let used: usize = row.iter().map(Token::width).sum();
        let gaps: Vec<usize> = (1..row.len().saturating_sub(1))
            .filter(|i| row[*i].is_space())
            .collect();
        if gaps.is_empty() || used >= width {
            return;
        }

        let extra = width - used;
        let base = extra / gaps.len();
        let remainder = extra % gaps.len();
        for (n, i) in gaps.into_iter().enumerate() {
            let add = base + usize::from(n < remainder);
            if let Token::Space(chars) = &mut row[i] {
                let style = chars.first().map(|(_, s)| *s).unwrap_or_default();
                chars.extend(std::iter::repeat((' ', style)).take(add));
            }
        }
    }

    fn to_line(&self, row: &[Token]) -> Line {
        let mut line = Line::empty();
        for token in row {
            for &(c, style) in token.chars() {
                line.push_char(c, self.style.patch(style));
            }
        }
        line
    }
}

fn push_char(paragraphs: &mut [Vec<StyledChar>], c: char, style: Style) {
    if let Some(last) = paragraphs.last_mut() {
        last.push((c, style));
    }
}

fn split_word(word: &[StyledChar], width: usize) -> Vec<Vec<StyledChar>> {
    let mut chunks = Vec::new();
    let mut chunk = Vec::new();
    let mut used = 0;
    for &(c, style) in word {
        let w = char_width(c);
        if used + w > width && !chunk.is_empty() {
            chunks.push(std::mem::take(&mut chunk));
            used = 0;
        }
        chunk.push((c, style));
        used += w;
    }
    if !chunk.is_empty() {
        chunks.push(chunk);
    }
    chunks
}

impl Renderable for Text {
    fn measure(&self, _theme: &Theme, _width: usize) -> Measurement {
        let wraps = self.whitespace.wraps();
        let mut min = 0;
        let mut max = 0;
        for paragraph in self.paragraphs() {
            let tokens = self.tokenize(&paragraph);
            let full: usize = tokens.iter().map(Token::width).sum();
            max = max.max(full);
            min = min.max(if wraps {
                tokens
                    .iter()
                    .filter(|t| !t.is_space())
                    .map(Token::width)
                    .max()
                    .unwrap_or(0)
            } else {
                full
            });
        }
        Measurement::new(min, max)
    }

    fn render(&self, _theme: &Theme, width: usize) -> Lines {
        if self.is_empty() {
            return Lines::empty();
        }

        let pad_style = self.style.background();
        let wraps = self.whitespace.wraps() && width > 0;
        let mut lines = Lines::empty();

        for paragraph in self.paragraphs() {
            let tokens = self.tokenize(&paragraph);
            let mut rows = if wraps {
                Self::wrap(tokens, width)
            } else {
                vec![tokens]
            };
            let last = rows.len().saturating_sub(1);
            for (i, row) in rows.iter_mut().enumerate() {
                if self.align == Alignment::Justify && i != last {
                    Self::justify(row, width);
                }
                lines.push(self.align.align(self.to_line(row), width, pad_style));
            }
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    fn render(text: &Text, width: usize) -> Vec<String> {
        text.render(&Theme::empty(), width)
            .lines
            .iter()
            .map(Line::plain)
            .collect()
    }

    #[test]
    fn test_wraps_at_word_boundaries() {
        let text = Text::new("the quick brown fox");
        assert_eq!(render(&text, 10), vec!["the quick ", "brown fox "]);
    }

    #[test]
    fn test_normal_collapses_whitespace_and_newlines() {
        let text = Text::new("  a \n\n  b   c  ");
        assert_eq!(render(&text, 7), vec!["a b c  "]);
    }

    #[test]
    fn test_breaks_only_overlong_words() {
        let text = Text::new("ab abcdefgh");
        assert_eq!(render(&text, 4), vec!["ab  ", "abcd", "efgh"]);
    }

    #[test]
    fn test_pre_keeps_lines_and_spaces() {
        let text = Text::new("text\n  line 2").whitespace(Whitespace::Pre);
        assert_eq!(render(&text, 8), vec!["text    ", "  line 2"]);
    }

    #[test]
    fn test_pre_never_wraps() {
        let text = Text::new("a long line").whitespace(Whitespace::Pre);
        assert_eq!(render(&text, 6), vec!["a long"]);
    }

    #[test]
    fn test_pre_expands_tabs() {
        let text = Text::new("a\tb").whitespace(Whitespace::Pre);
        assert_eq!(render(&text, 9), vec!["a       b"]);
    }

    #[test]
    fn test_pre_line_keeps_newlines_only() {
        let text = Text::new("a   b\nc").whitespace(Whitespace::PreLine);
        assert_eq!(render(&text, 4), vec!["a b ", "c   "]);
    }

    #[test]
    fn test_nowrap_truncates() {
        let text = Text::new("one two three").whitespace(Whitespace::NoWrap);
        assert_eq!(render(&text, 5), vec!["one t"]);
    }

    #[test]
    fn test_alignment() {
        let text = Text::new("ab").align(Alignment::Center);
        assert_eq!(render(&text, 5), vec![" ab  "]);
        let text = Text::new("ab").align(Alignment::Right);
        assert_eq!(render(&text, 5), vec!["   ab"]);
    }

    #[test]
    fn test_justify_skips_last_line() {
        let text = Text::new("aa b c dd ee").align(Alignment::Justify);
        assert_eq!(render(&text, 8), vec!["aa  b  c", "dd ee   "]);
    }

    #[test]
    fn test_measure() {
        let theme = Theme::empty();
        let text = Text::new("hello wonderful world");
        assert_eq!(text.measure(&theme, 80), Measurement::new(9, 21));

        let text = Text::new("ab\ncdef").whitespace(Whitespace::Pre);
        assert_eq!(text.measure(&theme, 80), Measurement::new(4, 4));
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        assert!(Text::new("").render(&Theme::empty(), 10).is_empty());
    }

    #[test]
    fn test_padding_carries_only_background() {
        let style = Style::new().fg(Color::RED).bg(Color::BLUE).underline();
        let lines = Text::new("ab").style(style).render(&Theme::empty(), 4);
        let line = &lines.lines[0];
        assert_eq!(line.spans[0].style, style);
        assert_eq!(line.spans[1].content, "  ");
        assert_eq!(line.spans[1].style, Style::new().bg(Color::BLUE));
    }

    #[test]
    fn test_span_styles_win_over_base() {
        let text = Text::from_spans(vec![Span::styled("x", Style::new().fg(Color::GREEN))])
            .style(Style::new().fg(Color::RED).bold());
        let lines = text.render(&Theme::empty(), 1);
        let style = lines.lines[0].spans[0].style;
        assert_eq!(style.fg, Some(Color::GREEN));
        assert!(style.add_modifier.contains(crate::style::Modifier::BOLD));
    }
}
