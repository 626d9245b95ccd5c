//! Native interface for the Windows console

use super::detect::{detect_ansi_support, detect_color_depth, EnvHints};
use super::interface::{InterfaceKind, TerminalInterface};
use crate::error::Result;
use crate::event::{poll_crossterm_event, read_crossterm_event, Event};
use crate::geometry::Size;
use crate::style::ColorDepth;
use crate::terminal::RawModeGuard;
use std::io::{self, IsTerminal};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct WindowsTerminal {
    hints: EnvHints,
    /// Virtual terminal processing could be enabled on the console
    vt_enabled: bool,
}

impl WindowsTerminal {
    pub fn new() -> Self {
        Self {
            hints: EnvHints::from_env(),
            vt_enabled: crossterm::ansi_support::supports_ansi(),
        }
    }
}

impl Default for WindowsTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalInterface for WindowsTerminal {
    fn kind(&self) -> InterfaceKind {
        InterfaceKind::Windows
    }

    fn size(&self) -> Option<Size> {
        crossterm::terminal::size()
            .ok()
            .and_then(|(width, height)| Size::reported(width, height))
    }

    fn stdout_is_terminal(&self) -> bool {
        io::stdout().is_terminal()
    }

    fn stdin_is_terminal(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn color_depth(&self) -> ColorDepth {
        let is_tty = self.stdout_is_terminal();
        let depth = detect_color_depth(&self.hints, is_tty);
        // Consoles rarely set TERM; a VT-capable console handles the 16 colors
        if depth == ColorDepth::NoColor
            && is_tty
            && self.vt_enabled
            && self.hints.term.is_none()
            && self.hints.force_color.is_none()
            && !self.hints.no_color
        {
            return ColorDepth::Ansi16;
        }
        depth
    }

    fn supports_ansi(&self) -> bool {
        self.vt_enabled && detect_ansi_support(&self.hints, self.stdout_is_terminal())
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
