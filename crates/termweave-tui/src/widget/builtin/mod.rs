//! Built-in widgets

mod border;
mod panel;
mod progress_bar;
mod spinner;
mod stack;
mod table;
mod text;

pub use border::BorderType;
pub use panel::Panel;
pub use progress_bar::ProgressBar;
pub use spinner::Spinner;
pub use stack::Stack;
pub use table::{Column, Row, Table};
pub use text::{Text, Whitespace};
