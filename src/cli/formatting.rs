//! Widgets built from command-line input

use serde_json::{json, Value};
use termweave_tui::terminal::InterfaceKind;
use termweave_tui::widget::{BorderType, Column, Panel, Row, Table, Text, Whitespace};
use termweave_tui::{Alignment, ColumnWidth, TerminalInfo};

/// Capability report as `(key, value)` pairs, in display order
pub fn probe_entries(
    kind: InterfaceKind,
    info: &TerminalInfo,
    render_width: usize,
) -> Vec<(&'static str, String)> {
    vec![
        ("interface", kind.as_str().to_string()),
        ("width", info.size.width.to_string()),
        ("height", info.size.height.to_string()),
        ("render width", render_width.to_string()),
        ("color depth", info.color_depth.as_str().to_string()),
        ("ansi", info.ansi.to_string()),
        ("stdout tty", info.stdout_interactive.to_string()),
        ("stdin tty", info.stdin_interactive.to_string()),
    ]
}

pub fn probe_json(kind: InterfaceKind, info: &TerminalInfo, render_width: usize) -> Value {
    json!({
        "interface": kind.as_str(),
        "width": info.size.width,
        "height": info.size.height,
        "render_width": render_width,
        "color_depth": info.color_depth.as_str(),
        "ansi": info.ansi,
        "stdout_interactive": info.stdout_interactive,
        "stdin_interactive": info.stdin_interactive,
    })
}

pub fn probe_table(kind: InterfaceKind, info: &TerminalInfo, render_width: usize) -> Table {
    Table::new()
        .border(Some(BorderType::Rounded))
        .column(ColumnWidth::Auto)
        .column(Column::new(ColumnWidth::Auto).align(Alignment::Right))
        .header(Row::new(["capability", "value"]))
        .rows(
            probe_entries(kind, info, render_width)
                .into_iter()
                .map(|(key, value)| Row::new([key.to_string(), value])),
        )
}

/// Split one delimited record into trimmed cells
pub fn split_record(record: &str, delimiter: char) -> Vec<String> {
    record
        .split(delimiter)
        .map(|cell| cell.trim().to_string())
        .collect()
}

/// A table of delimited records, the first one optionally used as header
pub fn record_table(
    records: &[String],
    delimiter: char,
    header: bool,
    border: Option<BorderType>,
) -> Table {
    let mut rows = records.iter().map(|r| Row::new(split_record(r, delimiter)));
    let mut table = Table::new().border(border);
    if header {
        if let Some(first) = rows.next() {
            table = table.header(first);
        }
    }
    table.rows(rows)
}

/// The effective configuration, one setting per line
pub fn config_panel(summary: &str) -> Panel {
    let body = summary
        .lines()
        .skip_while(|line| line.ends_with(':'))
        .collect::<Vec<_>>()
        .join("\n");
    Panel::new(Text::new(body).whitespace(Whitespace::Pre)).title("configuration")
}
