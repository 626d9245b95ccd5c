//! Column layout, alignment and padding

mod alignment;
mod constraint;
mod flex;
mod padding;

pub use alignment::Alignment;
pub use constraint::ColumnWidth;
pub use flex::resolve_widths;
pub use padding::Padding;
