//! Table widget: rows of cells laid out in shared columns

use super::border::{BorderChars, BorderType};
use crate::layout::{resolve_widths, Alignment, ColumnWidth};
use crate::style::{Line, Lines, Style};
use crate::theme::{keys, Theme};
use crate::widget::{Measurement, Renderable, Widget};

/// Width policy and alignment for one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Column {
    pub width: ColumnWidth,
    /// When set, cells render at their natural width and are aligned in the column
    pub align: Option<Alignment>,
}

impl Column {
    pub fn new(width: ColumnWidth) -> Self {
        Self { width, align: None }
    }

    pub fn align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }
}

impl From<ColumnWidth> for Column {
    fn from(width: ColumnWidth) -> Self {
        Self::new(width)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub cells: Vec<Widget>,
    /// Base style for every cell; also colors the blank filler of short cells
    pub style: Option<Style>,
}

impl Row {
    pub fn new<I, W>(cells: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<Widget>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            style: None,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }
}

/// Grid of widgets with optional header and border
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    header: Option<Row>,
    rows: Vec<Row>,
    border: Option<BorderType>,
    border_style: Option<Style>,
    spacing: usize,
    cell_padding: usize,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            header: None,
            rows: Vec::new(),
            border: None,
            border_style: None,
            spacing: 1,
            cell_padding: 1,
        }
    }

    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn column(mut self, column: impl Into<Column>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn header(mut self, header: Row) -> Self {
        self.header = Some(header);
        self
    }

    pub fn row(mut self, row: Row) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows<I: IntoIterator<Item = Row>>(mut self, rows: I) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn border(mut self, border: Option<BorderType>) -> Self {
        self.border = border;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = Some(style);
        self
    }

    /// Blank cells between columns of an unbordered table
    pub fn spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    /// Blank cells on each side of a cell inside a bordered table
    pub fn cell_padding(mut self, padding: usize) -> Self {
        self.cell_padding = padding;
        self
    }

    fn all_rows(&self) -> impl Iterator<Item = &Row> {
        self.header.iter().chain(self.rows.iter())
    }

    fn column_count(&self) -> usize {
        self.all_rows()
            .map(|row| row.cells.len())
            .max()
            .unwrap_or(0)
            .max(self.columns.len())
    }

    fn column_at(&self, i: usize) -> Column {
        self.columns.get(i).copied().unwrap_or_default()
    }

    /// Cells taken by borders, separators and spacing
    fn overhead(&self, columns: usize) -> usize {
        if columns == 0 {
            return 0;
        }
        match self.border {
            Some(_) => columns + 1 + 2 * self.cell_padding * columns,
            None => self.spacing * (columns - 1),
        }
    }

    fn column_measurements(&self, theme: &Theme, width: usize) -> Vec<Measurement> {
        let mut measurements = vec![Measurement::default(); self.column_count()];
        for row in self.all_rows() {
            for (i, cell) in row.cells.iter().enumerate() {
                let m = match self.column_at(i).width {
                    ColumnWidth::Fixed(n) => cell.measure(theme, n),
                    _ => cell.measure(theme, width),
                };
                measurements[i] = measurements[i].union(m);
            }
        }
        measurements
    }

    fn render_row(
        &self,
        theme: &Theme,
        row: &Row,
        style: Style,
        widths: &[usize],
    ) -> Vec<Vec<Line>> {
        let filler = style.background();
        let mut cells: Vec<Vec<Line>> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let Some(cell) = row.cells.get(i) else {
                    return Vec::new();
                };
                match self.column_at(i).align {
                    Some(align) => {
                        let natural = cell.measure(theme, width).max.min(width);
                        cell.render(theme, natural)
                            .into_iter()
                            .map(|line| align.align(line.style(style), width, filler))
                            .collect()
                    }
                    None => cell
                        .render(theme, width)
                        .into_iter()
                        .map(|line| line.style(style).fit(width, filler))
                        .collect(),
                }
            })
            .collect();

        let height = cells.iter().map(Vec::len).max().unwrap_or(0);
        for (cell, &width) in cells.iter_mut().zip(widths) {
            while cell.len() < height {
                cell.push(Line::blank(width, filler));
            }
        }
        cells
    }

    fn join_cells(
        &self,
        cells: &[Vec<Line>],
        line: usize,
        filler: Style,
        border: Option<(BorderChars, Style)>,
    ) -> Line {
        let mut out = Line::empty();
        match border {
            Some((chars, border_style)) => {
                let pad = " ".repeat(self.cell_padding);
                out.push_char(chars.vertical, border_style);
                for cell in cells {
                    out.push_str(&pad, filler);
                    out.extend(cell[line].clone());
                    out.push_str(&pad, filler);
                    out.push_char(chars.vertical, border_style);
                }
            }
            None => {
                let gap = " ".repeat(self.spacing);
                for (i, cell) in cells.iter().enumerate() {
                    if i > 0 {
                        out.push_str(&gap, filler);
                    }
                    out.extend(cell[line].clone());
                }
            }
        }
        out
    }

    fn rule(
        &self,
        (left, junction, right): (char, char, char),
        chars: &BorderChars,
        widths: &[usize],
        style: Style,
    ) -> Line {
        let mut line = Line::empty();
        line.push_char(left, style);
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push_char(junction, style);
            }
            let run = chars.horizontal.to_string().repeat(width + 2 * self.cell_padding);
            line.push_str(&run, style);
        }
        line.push_char(right, style);
        line
    }
}

impl Renderable for Table {
    fn measure(&self, theme: &Theme, width: usize) -> Measurement {
        let count = self.column_count();
        let measurements = self.column_measurements(theme, width);
        let overhead = self.overhead(count);

        let mut min = overhead;
        let mut max = overhead;
        let mut flexible = false;
        for (i, m) in measurements.iter().enumerate() {
            match self.column_at(i).width {
                ColumnWidth::Fixed(n) => {
                    min += n;
                    max += n;
                }
                ColumnWidth::Auto => {
                    min += m.min;
                    max += m.max;
                }
                ColumnWidth::Weighted(_) | ColumnWidth::Expand => {
                    min += m.min;
                    flexible = true;
                }
            }
        }

        if flexible {
            Measurement::new(min, width)
        } else {
            Measurement::new(min, max)
        }
    }

    fn render(&self, theme: &Theme, width: usize) -> Lines {
        let count = self.column_count();
        if count == 0 {
            return Lines::empty();
        }

        let columns: Vec<ColumnWidth> = (0..count).map(|i| self.column_at(i).width).collect();
        let measurements = self.column_measurements(theme, width);
        let available = width.saturating_sub(self.overhead(count));
        let widths = resolve_widths(&columns, &measurements, available);

        let border = self.border.map(|b| {
            let style =
                theme.resolve(keys::TABLE_BORDER, self.border_style, Style::new(), Style::new());
            (b.chars(), style)
        });
        let rule = |corners: (char, char, char), chars: &BorderChars, style: Style| {
            self.rule(corners, chars, &widths, style)
        };

        let mut lines = Lines::empty();
        if let Some((chars, style)) = border {
            lines.push(rule((chars.top_left, chars.top_tee, chars.top_right), &chars, style));
        }

        if let Some(header) = &self.header {
            let bold = Style::new().bold();
            let style = theme.resolve(keys::TABLE_HEADER, header.style, bold, Style::new());
            let cells = self.render_row(theme, header, style, &widths);
            for i in 0..cells.first().map_or(0, Vec::len) {
                lines.push(self.join_cells(&cells, i, style.background(), border));
            }
            if let Some((chars, style)) = border {
                lines.push(rule((chars.left_tee, chars.cross, chars.right_tee), &chars, style));
            }
        }

        for row in &self.rows {
            let style = row.style.unwrap_or_default();
            let cells = self.render_row(theme, row, style, &widths);
            for i in 0..cells.first().map_or(0, Vec::len) {
                lines.push(self.join_cells(&cells, i, style.background(), border));
            }
        }

        if let Some((chars, style)) = border {
            let corners = (chars.bottom_left, chars.bottom_tee, chars.bottom_right);
            lines.push(rule(corners, &chars, style));
        }

        lines.into_iter().map(|line| line.fit(width, Style::new())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;
    use crate::widget::builtin::Text;
    use crate::widget::render;

    fn plain(table: &Table, width: usize) -> Vec<String> {
        render(table, &Theme::empty(), width)
            .lines
            .iter()
            .map(Line::plain)
            .collect()
    }

    #[test]
    fn test_auto_columns() {
        let table = Table::new()
            .row(Row::new(["a", "bb"]))
            .row(Row::new(["ccc", "d"]));
        assert_eq!(plain(&table, 40), vec!["a   bb", "ccc d "]);
    }

    #[test]
    fn test_fixed_and_expand() {
        let table = Table::new()
            .columns([ColumnWidth::Fixed(4), ColumnWidth::Expand])
            .row(Row::new(["ab", "cd"]));
        assert_eq!(plain(&table, 10), vec!["ab   cd   "]);
    }

    #[test]
    fn test_column_alignment() {
        let table = Table::new()
            .columns([
                Column::new(ColumnWidth::Fixed(5)).align(Alignment::Right),
                Column::new(ColumnWidth::Fixed(5)).align(Alignment::Center),
            ])
            .spacing(0)
            .row(Row::new(["ab", "c"]));
        assert_eq!(plain(&table, 10), vec!["   ab  c  "]);
    }

    #[test]
    fn test_short_cells_padded_with_row_background() {
        let style = Style::new().bg(Color::BLUE);
        let table = Table::new()
            .spacing(0)
            .columns([ColumnWidth::Fixed(3), ColumnWidth::Fixed(3)])
            .row(Row::new(vec![Widget::from("a b"), Widget::from("x")]).style(style));
        let lines = table.render(&Theme::empty(), 6);
        assert_eq!(lines.height(), 1);

        let table = Table::new()
            .spacing(0)
            .columns([ColumnWidth::Fixed(1), ColumnWidth::Fixed(1)])
            .row(Row::new(vec![Widget::from("a b"), Widget::from("x")]).style(style));
        let lines = table.render(&Theme::empty(), 2);
        assert_eq!(lines.plain(), "ax\nb ");
        let filler = lines.lines[1].spans.last().cloned().unwrap_or_default();
        assert_eq!(filler.style, Style::new().bg(Color::BLUE));
    }

    #[test]
    fn test_column_gap_carries_row_background() {
        let style = Style::new().bg(Color::BLUE);
        let table = Table::new()
            .spacing(2)
            .columns([ColumnWidth::Fixed(1), ColumnWidth::Fixed(1)])
            .row(Row::new(["a", "b"]).style(style));
        let lines = table.render(&Theme::empty(), 4);
        assert_eq!(lines.plain(), "a  b");
        let backgrounds: Vec<Option<Color>> =
            lines.lines[0].styled_chars().map(|(_, s)| s.bg).collect();
        assert_eq!(backgrounds, vec![Some(Color::BLUE); 4]);
    }

    #[test]
    fn test_bordered_with_header() {
        let table = Table::new()
            .border(Some(BorderType::Square))
            .header(Row::new(["h1", "h2"]))
            .row(Row::new(["a", "b"]));
        assert_eq!(
            plain(&table, 40),
            vec![
                "┌────┬────┐",
                "│ h1 │ h2 │",
                "├────┼────┤",
                "│ a  │ b  │",
                "└────┴────┘",
            ]
        );
    }

    #[test]
    fn test_header_style_from_theme() {
        let theme = Theme::empty().with_style(keys::TABLE_HEADER, Style::new().fg(Color::RED));
        let table = Table::new().header(Row::new(["h"])).row(Row::new(["v"]));
        let lines = table.render(&theme, 1);
        assert_eq!(lines.lines[0].spans[0].style.fg, Some(Color::RED));
        assert_eq!(lines.lines[1].spans[0].style, Style::new());
    }

    #[test]
    fn test_measure() {
        let theme = Theme::empty();
        let table = Table::new().row(Row::new([Text::new("hello world"), Text::new("x")]));
        assert_eq!(table.measure(&theme, 80), Measurement::new(7, 13));

        let table = Table::new()
            .columns([ColumnWidth::Auto, ColumnWidth::Expand])
            .row(Row::new(["a", "b"]));
        assert_eq!(table.measure(&theme, 30).max, 30);
    }

    #[test]
    fn test_missing_cells_render_blank() {
        let table = Table::new()
            .row(Row::new(["a", "b"]))
            .row(Row::new(["c"]));
        assert_eq!(plain(&table, 10), vec!["a b", "c  "]);
    }
}
