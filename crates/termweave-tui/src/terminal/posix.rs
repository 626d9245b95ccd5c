//! Native interface for Unix-like systems

use super::detect::{detect_ansi_support, detect_color_depth, EnvHints};
use super::interface::{InterfaceKind, TerminalInterface};
use crate::error::Result;
use crate::event::{poll_crossterm_event, read_crossterm_event, Event};
use crate::geometry::Size;
use crate::style::ColorDepth;
use crate::terminal::RawModeGuard;
use std::io::{self, IsTerminal};
use std::time::Duration;
use terminal_size::{terminal_size, Height, Width};

#[derive(Debug, Clone)]
pub struct PosixTerminal {
    hints: EnvHints,
}

impl PosixTerminal {
    pub fn new() -> Self {
        Self::with_hints(EnvHints::from_env())
    }

    pub fn with_hints(hints: EnvHints) -> Self {
        Self { hints }
    }
}

impl Default for PosixTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalInterface for PosixTerminal {
    fn kind(&self) -> InterfaceKind {
        InterfaceKind::Posix
    }

    fn size(&self) -> Option<Size> {
        terminal_size()
            .and_then(|(Width(width), Height(height))| Size::reported(width, height))
            .or_else(|| Size::from_columns_lines(self.hints.columns, self.hints.lines))
    }

    fn stdout_is_terminal(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn stdin_is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn color_depth(&self) -> ColorDepth {
        detect_color_depth(&self.hints, self.stdout_is_terminal())
    }

    fn supports_ansi(&self) -> bool {
        detect_ansi_support(&self.hints, self.stdout_is_terminal())
    }

    fn enter_raw_mode(&self) -> Result<RawModeGuard> {
        RawModeGuard::acquire()
    }

    fn read_event(&self) -> Result<Event> {
        if !self.stdin_is_terminal() {
            return Ok(Event::Eof);
        }
        read_crossterm_event()
    }

    fn poll_event(&self, timeout: Duration) -> Result<Option<Event>> {
        if !self.stdin_is_terminal() {
            return Ok(Some(Event::Eof));
        }
        poll_crossterm_event(timeout)
    }
}
