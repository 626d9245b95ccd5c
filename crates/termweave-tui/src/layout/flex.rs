//! Column width resolution

use super::ColumnWidth;
use crate::widget::Measurement;

/// Split `available` cells between columns.
///
/// Fixed and Auto columns are satisfied first. If they overflow, the widest
/// Auto column above its minimum gives up one cell at a time (leftmost wins
/// ties), and anything still over is clipped from the rightmost column.
/// Whatever is left goes to Weighted/Expand columns in proportion to their
/// weights, rounding down, with leftover cells handed out left to right.
pub fn resolve_widths(
    columns: &[ColumnWidth],
    content: &[Measurement],
    available: usize,
) -> Vec<usize> {
    let measure = |i: usize| content.get(i).copied().unwrap_or_default();

    // First pass: rigid columns
    let mut widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, column)| match column {
            ColumnWidth::Fixed(n) => *n,
            ColumnWidth::Auto => measure(i).max,
            ColumnWidth::Weighted(_) | ColumnWidth::Expand => 0,
        })
        .collect();
    let mut used: usize = widths.iter().sum();

    while used > available {
        let widest = columns
            .iter()
            .enumerate()
            .filter(|(i, column)| **column == ColumnWidth::Auto && widths[*i] > measure(*i).min)
            .map(|(i, _)| i)
            .fold(None, |best: Option<usize>, i| match best {
                Some(b) if widths[b] >= widths[i] => Some(b),
                _ => Some(i),
            });
        match widest {
            Some(i) => {
                widths[i] -= 1;
                used -= 1;
            }
            None => break,
        }
    }

    if used > available {
        for width in widths.iter_mut().rev() {
            let cut = (*width).min(used - available);
            *width -= cut;
            used -= cut;
            if used == available {
                break;
            }
        }
    }

    // Second pass: distribute what is left to flexible columns
    let remaining = available - used;
    let total_weight: u32 = columns.iter().map(ColumnWidth::weight).sum();
    if total_weight > 0 && remaining > 0 {
        let mut distributed = 0;
        for (i, column) in columns.iter().enumerate() {
            let share = remaining as u64 * u64::from(column.weight()) / u64::from(total_weight);
            widths[i] += share as usize;
            distributed += share as usize;
        }

        let mut leftover = remaining - distributed;
        for (i, column) in columns.iter().enumerate() {
            if leftover == 0 {
                break;
            }
            if column.weight() > 0 {
                widths[i] += 1;
                leftover -= 1;
            }
        }
    }

    widths
}
