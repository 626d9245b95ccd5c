//! Input event types

pub use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::{Error, Result};
use std::time::Duration;

/// Input read from a terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Resize {
        /// New width in columns
        width: u16,
        /// New height in rows
        height: u16,
    },
    /// Input stream closed or not interactive
    Eof,
}

impl Event {
    /// Check if this is a quit event (Ctrl+C or Ctrl+D)
    pub fn is_quit(&self) -> bool {
        matches!(
            self,
            Event::Key(KeyEvent {
                code: KeyCode::Char('c') | KeyCode::Char('d'),
                modifiers,
                ..
            }) if modifiers.contains(KeyModifiers::CONTROL)
        ) || matches!(self, Event::Eof)
    }

    /// Convert a crossterm event; mouse, focus and paste input is dropped
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::Event as CEvent;
        match event {
            CEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
            CEvent::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

/// Block until crossterm yields a key or resize event
pub(crate) fn read_crossterm_event() -> Result<Event> {
    loop {
        let event = crossterm::event::read().map_err(Error::Io)?;
        if let Some(event) = Event::from_crossterm(event) {
            return Ok(event);
        }
    }
}

/// Wait up to `timeout` for a key or resize event
pub(crate) fn poll_crossterm_event(timeout: Duration) -> Result<Option<Event>> {
    let deadline = std::time::Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        if !crossterm::event::poll(remaining)? {
            return Ok(None);
        }
        if let Some(event) = Event::from_crossterm(crossterm::event::read()?) {
            return Ok(Some(event));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quit() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(ctrl_c.is_quit());
        assert!(Event::Eof.is_quit());

        let just_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!just_c.is_quit());
    }

    #[test]
    fn test_from_crossterm() {
        let resize = Event::from_crossterm(crossterm::event::Event::Resize(100, 40));
        assert_eq!(resize, Some(Event::Resize { width: 100, height: 40 }));

        let focus = Event::from_crossterm(crossterm::event::Event::FocusGained);
        assert_eq!(focus, None);
    }
}
