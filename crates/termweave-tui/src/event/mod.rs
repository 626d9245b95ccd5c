//! Terminal input events

mod input;

pub use input::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
pub(crate) use input::{poll_crossterm_event, read_crossterm_event};
