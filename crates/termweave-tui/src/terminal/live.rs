//! In-place repainting of a multi-line frame

use super::ansi::encode_lines;
use super::interface::TerminalInfo;
use crate::style::Lines;
use crossterm::{
    cursor::{Hide, MoveToNextLine, MoveToPreviousLine, Show},
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Repaints a frame below the cursor, rewriting only lines that changed.
///
/// The cursor rests at the start of the line after the frame between
/// paints, so a live frame is clipped to one line less than the terminal
/// height. When the output cannot move the cursor, only the latest frame is
/// kept and written once by [`LinePainter::finish`].
#[derive(Debug, Default)]
pub struct LinePainter {
    previous: Vec<String>,
    pending: Option<Vec<String>>,
    cursor_hidden: bool,
}

impl LinePainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines currently on screen
    pub fn height(&self) -> usize {
        self.previous.len()
    }

    pub fn paint<W: Write>(
        &mut self,
        out: &mut W,
        info: &TerminalInfo,
        lines: &Lines,
    ) -> io::Result<()> {
        let mut encoded = encode_lines(lines, info);
        if !info.cursor_movement() {
            self.pending = Some(encoded);
            return Ok(());
        }
        encoded.truncate(visible_rows(info));
        if encoded == self.previous {
            return Ok(());
        }

        if !self.cursor_hidden {
            queue!(out, Hide)?;
            self.cursor_hidden = true;
        }
        if let Some(n) = line_count(self.previous.len()) {
            queue!(out, MoveToPreviousLine(n))?;
        }

        let mut skipped = 0usize;
        for (i, line) in encoded.iter().enumerate() {
            if self.previous.get(i) == Some(line) {
                skipped += 1;
                continue;
            }
            if let Some(n) = line_count(std::mem::take(&mut skipped)) {
                queue!(out, MoveToNextLine(n))?;
            }
            queue!(out, Print(line), Clear(ClearType::UntilNewLine), Print("\r\n"))?;
        }
        if let Some(n) = line_count(skipped) {
            queue!(out, MoveToNextLine(n))?;
        }
        if encoded.len() < self.previous.len() {
            queue!(out, Clear(ClearType::FromCursorDown))?;
        }

        out.flush()?;
        self.previous = encoded;
        Ok(())
    }

    /// Erase the frame and leave the cursor where it started
    pub fn clear<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.pending = None;
        if let Some(n) = line_count(self.previous.len()) {
            queue!(out, MoveToPreviousLine(n), Clear(ClearType::FromCursorDown))?;
        }
        self.previous.clear();
        out.flush()
    }

    /// Leave the last frame on screen and restore the cursor
    pub fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if let Some(lines) = self.pending.take() {
            for line in lines {
                queue!(out, Print(line), Print("\n"))?;
            }
        }
        if std::mem::take(&mut self.cursor_hidden) {
            queue!(out, Show)?;
        }
        self.previous.clear();
        out.flush()
    }
}

/// Rows a live frame may use without scrolling its top off screen
fn visible_rows(info: &TerminalInfo) -> usize {
    usize::from(info.size.height).saturating_sub(1).max(1)
}

/// Cursor movement counts of zero mean one to terminals
fn line_count(n: usize) -> Option<u16> {
    (n > 0).then(|| n.min(u16::MAX as usize) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::style::Line;

    fn interactive() -> TerminalInfo {
        TerminalInfo {
            ansi: true,
            stdout_interactive: true,
            ..TerminalInfo::plain(Size::fallback())
        }
    }

    fn frame(lines: &[&str]) -> Lines {
        lines.iter().map(|l| Line::raw(*l)).collect()
    }

    fn paint(painter: &mut LinePainter, info: &TerminalInfo, lines: &[&str]) -> String {
        let mut out = Vec::new();
        painter.paint(&mut out, info, &frame(lines)).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_first_paint_writes_every_line() {
        let mut painter = LinePainter::new();
        let out = paint(&mut painter, &interactive(), &["a", "b"]);
        assert_eq!(out, "\x1b[?25la\x1b[K\r\nb\x1b[K\r\n");
        assert_eq!(painter.height(), 2);
    }

    #[test]
    fn test_only_changed_lines_are_rewritten() {
        let info = interactive();
        let mut painter = LinePainter::new();
        paint(&mut painter, &info, &["a", "b", "c"]);
        let out = paint(&mut painter, &info, &["a", "B", "c"]);
        assert_eq!(out, "\x1b[3F\x1b[1EB\x1b[K\r\n\x1b[1E");
    }

    #[test]
    fn test_identical_frame_writes_nothing() {
        let info = interactive();
        let mut painter = LinePainter::new();
        paint(&mut painter, &info, &["a"]);
        assert!(paint(&mut painter, &info, &["a"]).is_empty());
    }

    #[test]
    fn test_shrinking_frame_clears_below() {
        let info = interactive();
        let mut painter = LinePainter::new();
        paint(&mut painter, &info, &["a", "b"]);
        let out = paint(&mut painter, &info, &["x"]);
        assert!(out.ends_with("x\x1b[K\r\n\x1b[J"));
        assert_eq!(painter.height(), 1);
    }

    #[test]
    fn test_tall_frame_is_clipped_to_terminal() {
        let info = TerminalInfo {
            size: Size::new(20, 3),
            ..interactive()
        };
        let mut painter = LinePainter::new();
        let out = paint(&mut painter, &info, &["a", "b", "c", "d"]);
        assert_eq!(out, "\x1b[?25la\x1b[K\r\nb\x1b[K\r\n");
        assert_eq!(painter.height(), 2);

        let out = paint(&mut painter, &info, &["a", "B", "c", "d"]);
        assert_eq!(out, "\x1b[2F\x1b[1EB\x1b[K\r\n");
    }

    #[test]
    fn test_non_interactive_prints_last_frame_on_finish() {
        let info = TerminalInfo::plain(Size::fallback());
        let mut painter = LinePainter::new();
        assert!(paint(&mut painter, &info, &["1"]).is_empty());
        assert!(paint(&mut painter, &info, &["2"]).is_empty());

        let mut out = Vec::new();
        painter.finish(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2\n");
    }

    #[test]
    fn test_finish_shows_cursor() {
        let info = interactive();
        let mut painter = LinePainter::new();
        paint(&mut painter, &info, &["a"]);
        let mut out = Vec::new();
        painter.finish(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\x1b[?25h");
    }
}
