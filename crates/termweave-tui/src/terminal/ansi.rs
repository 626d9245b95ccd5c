//! SGR encoding of styled lines

use super::interface::TerminalInfo;
use crate::style::{Color, Line, Lines, Style};
use crossterm::style::{Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::Command;
use std::fmt;

/// Encode `line` for a terminal described by `info`.
///
/// Colors are downsampled to the terminal's depth. Without escape support
/// only the text is emitted.
pub fn encode_line(line: &Line, info: &TerminalInfo) -> String {
    let mut out = String::with_capacity(line.width() + 16);
    // Writing into a String cannot fail
    let _ = write_line(&mut out, line, info);
    out
}

/// Encode `lines`, one entry per line, without line terminators
pub fn encode_lines(lines: &Lines, info: &TerminalInfo) -> Vec<String> {
    lines.lines.iter().map(|line| encode_line(line, info)).collect()
}

pub fn write_line(out: &mut impl fmt::Write, line: &Line, info: &TerminalInfo) -> fmt::Result {
    if !info.ansi {
        for span in &line.spans {
            out.write_str(&span.content)?;
        }
        return Ok(());
    }

    let mut current = Style::new();
    for span in &line.spans {
        let style = span.style.downsample(info.color_depth);
        if style != current {
            if !current.is_empty() {
                SetAttribute(Attribute::Reset).write_ansi(out)?;
            }
            write_style(out, style)?;
            current = style;
        }
        out.write_str(&span.content)?;
    }
    if !current.is_empty() {
        SetAttribute(Attribute::Reset).write_ansi(out)?;
    }
    Ok(())
}

fn write_style(out: &mut impl fmt::Write, style: Style) -> fmt::Result {
    if let Some(fg) = style.fg {
        write_color(out, fg, false)?;
    }
    if let Some(bg) = style.bg {
        write_color(out, bg, true)?;
    }
    for attribute in style.add_modifier.attributes() {
        SetAttribute(attribute).write_ansi(out)?;
    }
    Ok(())
}

fn write_color(out: &mut impl fmt::Write, color: Color, background: bool) -> fmt::Result {
    match color {
        Color::Default => Ok(()),
        // Classic codes so 16-color terminals without the 256 palette understand them
        Color::Ansi16(index) => {
            let index = index % 16;
            let base = match (background, index < 8) {
                (false, true) => 30,
                (false, false) => 90 - 8,
                (true, true) => 40,
                (true, false) => 100 - 8,
            };
            write!(out, "\x1b[{}m", base + index as u16)
        }
        other if background => SetBackgroundColor(other.into()).write_ansi(out),
        other => SetForegroundColor(other.into()).write_ansi(out),
    }
}
