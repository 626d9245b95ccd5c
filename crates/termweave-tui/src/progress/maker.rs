//! Composition of per-task cell widgets into one widget

use crate::widget::{Column, Row, Stack, Table, Widget};

/// Column settings for progress rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    pub columns: Vec<Column>,
    /// Blank columns between cells
    pub spacing: usize,
    /// Unify each column's width across rows
    pub align_columns: bool,
}

/// Strategy for arranging rows of built cells
pub trait ProgressBarWidgetMaker {
    /// `rows` holds one entry per task, each with one widget per column
    fn compose(&self, layout: &RowLayout, rows: Vec<Vec<Widget>>) -> Widget;
}

/// Aligned layouts become a single table so columns line up; otherwise each
/// task is its own table and the rows are stacked.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseProgressBarWidgetMaker;

impl BaseProgressBarWidgetMaker {
    fn table(layout: &RowLayout) -> Table {
        Table::new()
            .columns(layout.columns.iter().copied())
            .spacing(layout.spacing)
    }
}

impl ProgressBarWidgetMaker for BaseProgressBarWidgetMaker {
    fn compose(&self, layout: &RowLayout, rows: Vec<Vec<Widget>>) -> Widget {
        match rows.len() {
            0 => Widget::Empty,
            _ if layout.align_columns => Self::table(layout)
                .rows(rows.into_iter().map(Row::new))
                .into(),
            _ => rows
                .into_iter()
                .map(|cells| Widget::from(Self::table(layout).row(Row::new(cells))))
                .collect::<Stack>()
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Alignment, ColumnWidth};
    use crate::theme::Theme;
    use crate::widget::{render, Text};

    fn layout(align_columns: bool) -> RowLayout {
        RowLayout {
            columns: vec![
                Column::new(ColumnWidth::Auto).align(Alignment::Right),
                Column::new(ColumnWidth::Auto),
            ],
            spacing: 1,
            align_columns,
        }
    }

    fn rows() -> Vec<Vec<Widget>> {
        vec![
            vec![Text::new("1").into(), Text::new("a").into()],
            vec![Text::new("100").into(), Text::new("b").into()],
        ]
    }

    #[test]
    fn test_no_rows_is_empty() {
        let widget = BaseProgressBarWidgetMaker.compose(&layout(true), Vec::new());
        assert_eq!(widget, Widget::Empty);
    }

    #[test]
    fn test_aligned_rows_right_align_column() {
        let widget = BaseProgressBarWidgetMaker.compose(&layout(true), rows());
        let lines = render(&widget, &Theme::empty(), 20);
        assert_eq!(lines.plain(), "  1 a\n100 b");
    }

    #[test]
    fn test_unaligned_rows_are_stacked() {
        let widget = BaseProgressBarWidgetMaker.compose(&layout(false), rows());
        assert!(matches!(widget, Widget::Stack(_)));
        let lines = render(&widget, &Theme::empty(), 20);
        assert_eq!(lines.plain(), "1 a  \n100 b");
    }
}
