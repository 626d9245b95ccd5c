//! Fallback interface for non-interactive or unsupported environments

use super::interface::{InterfaceKind, TerminalInterface};
use crate::error::{Error, Result};
use crate::event::Event;
use crate::geometry::Size;
use crate::style::ColorDepth;
use crate::terminal::RawModeGuard;
use std::time::Duration;

/// Interface with fixed capabilities and no input.
///
/// Defaults to 80x24, no color and no escapes. Raw mode is unsupported and
/// reading input yields [`Event::Eof`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubTerminal {
    size: Size,
    color_depth: ColorDepth,
    ansi: bool,
    interactive: bool,
}

impl Default for StubTerminal {
    fn default() -> Self {
        Self {
            size: Size::fallback(),
            color_depth: ColorDepth::NoColor,
            ansi: false,
            interactive: false,
        }
    }
}

impl StubTerminal {
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Report `depth`; any depth other than `NoColor` also enables escapes
    pub fn with_color_depth(mut self, depth: ColorDepth) -> Self {
        self.color_depth = depth;
        self.ansi = depth != ColorDepth::NoColor;
        self
    }

    /// Pretend stdout is a terminal so frames are redrawn in place
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }
}

impl TerminalInterface for StubTerminal {
    fn kind(&self) -> InterfaceKind {
        InterfaceKind::Stub
    }

    fn size(&self) -> Option<Size> {
        Some(self.size)
    }

    fn stdout_is_terminal(&self) -> bool {
        self.interactive
    }

    fn stdin_is_terminal(&self) -> bool {
        false
    }

    fn color_depth(&self) -> ColorDepth {
        self.color_depth
    }

    fn supports_ansi(&self) -> bool {
        self.ansi
    }

    fn enter_raw_mode(&self) -> Result<RawModeGuard> {
        Err(Error::RawModeUnsupported("stub"))
    }

    fn read_event(&self) -> Result<Event> {
        Ok(Event::Eof)
    }

    fn poll_event(&self, _timeout: Duration) -> Result<Option<Event>> {
        Ok(Some(Event::Eof))
    }
}
