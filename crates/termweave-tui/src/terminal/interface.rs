//! Platform terminal interfaces and process-wide selection
//!
//! Exactly one interface is active per process. It is chosen on first use
//! by running the probes in order (an interface forced through the
//! environment, then the native one for this platform) and falls back to
//! [`StubTerminal`] when none applies.

use super::stub::StubTerminal;
use crate::error::{Error, Result};
use crate::event::Event;
use crate::geometry::Size;
use crate::style::ColorDepth;
use crate::terminal::RawModeGuard;
use std::fmt;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable naming an interface to force (`posix`, `windows`, `stub`)
pub const INTERFACE_ENV: &str = "TERMWEAVE_INTERFACE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterfaceKind {
    Posix,
    Windows,
    Stub,
}

impl InterfaceKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "posix" | "unix" => Some(Self::Posix),
            "windows" | "win32" => Some(Self::Windows),
            "stub" | "none" => Some(Self::Stub),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::Windows => "windows",
            Self::Stub => "stub",
        }
    }

    /// Build the interface, or `None` if it cannot exist on this platform
    pub fn instantiate(self) -> Option<Arc<dyn TerminalInterface>> {
        match self {
            Self::Posix => posix(),
            Self::Windows => windows(),
            Self::Stub => Some(Arc::new(StubTerminal::default())),
        }
    }
}

#[cfg(unix)]
fn posix() -> Option<Arc<dyn TerminalInterface>> {
    Some(Arc::new(super::posix::PosixTerminal::new()))
}

#[cfg(not(unix))]
fn posix() -> Option<Arc<dyn TerminalInterface>> {
    None
}

#[cfg(windows)]
fn windows() -> Option<Arc<dyn TerminalInterface>> {
    Some(Arc::new(super::windows::WindowsTerminal::new()))
}

#[cfg(not(windows))]
fn windows() -> Option<Arc<dyn TerminalInterface>> {
    None
}

/// Snapshot of what a terminal can do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalInfo {
    pub size: Size,
    pub color_depth: ColorDepth,
    /// Escape sequences (attributes, cursor movement) may be written
    pub ansi: bool,
    pub stdout_interactive: bool,
    pub stdin_interactive: bool,
}

impl TerminalInfo {
    /// Plain output: no color, no escapes, not interactive
    pub const fn plain(size: Size) -> Self {
        Self {
            size,
            color_depth: ColorDepth::NoColor,
            ansi: false,
            stdout_interactive: false,
            stdin_interactive: false,
        }
    }

    /// True when frames can be redrawn in place
    pub const fn cursor_movement(&self) -> bool {
        self.ansi && self.stdout_interactive
    }
}

/// A platform terminal
pub trait TerminalInterface: fmt::Debug + Send + Sync {
    fn kind(&self) -> InterfaceKind;

    /// Current size, or `None` when it cannot be determined
    fn size(&self) -> Option<Size>;

    fn stdout_is_terminal(&self) -> bool;

    fn stdin_is_terminal(&self) -> bool;

    fn color_depth(&self) -> ColorDepth;

    fn supports_ansi(&self) -> bool;

    /// Switch the input to raw mode until the guard is dropped
    fn enter_raw_mode(&self) -> Result<RawModeGuard>;

    /// Block until the next key or resize event
    fn read_event(&self) -> Result<Event>;

    /// Wait up to `timeout` for a key or resize event
    fn poll_event(&self, timeout: Duration) -> Result<Option<Event>>;

    fn info(&self) -> TerminalInfo {
        TerminalInfo {
            size: self.size().unwrap_or_else(Size::fallback),
            color_depth: self.color_depth(),
            ansi: self.supports_ansi(),
            stdout_interactive: self.stdout_is_terminal(),
            stdin_interactive: self.stdin_is_terminal(),
        }
    }
}

/// A probe yields an interface if it applies to the current process
pub type Probe = fn() -> Option<Arc<dyn TerminalInterface>>;

/// Probes in priority order
pub const PROBES: &[(&str, Probe)] = &[("forced", probe_forced), ("native", probe_native)];

fn probe_forced() -> Option<Arc<dyn TerminalInterface>> {
    let name = std::env::var(INTERFACE_ENV).ok()?;
    match InterfaceKind::from_name(&name) {
        Some(kind) => {
            let interface = kind.instantiate();
            if interface.is_none() {
                warn!(interface = kind.as_str(), "forced terminal interface is not available here");
            }
            interface
        }
        None => {
            warn!(value = %name, "ignoring unknown {}", INTERFACE_ENV);
            None
        }
    }
}

fn probe_native() -> Option<Arc<dyn TerminalInterface>> {
    if cfg!(unix) {
        InterfaceKind::Posix.instantiate()
    } else if cfg!(windows) {
        InterfaceKind::Windows.instantiate()
    } else {
        None
    }
}

/// Run `probes` in order; the first that yields an interface wins
pub fn select_interface(probes: &[(&str, Probe)]) -> Arc<dyn TerminalInterface> {
    for (name, probe) in probes {
        if let Some(interface) = probe() {
            debug!(
                probe = *name,
                interface = interface.kind().as_str(),
                "selected terminal interface"
            );
            return interface;
        }
    }
    debug!("no terminal probe matched, using stub interface");
    Arc::new(StubTerminal::default())
}

static INTERFACE: OnceLock<Arc<dyn TerminalInterface>> = OnceLock::new();

/// The process-wide terminal interface, resolved on first call
pub fn terminal_interface() -> Arc<dyn TerminalInterface> {
    Arc::clone(INTERFACE.get_or_init(|| select_interface(PROBES)))
}

/// Install a specific interface before anything resolves one.
///
/// Fails with [`Error::InterfaceAlreadyInitialized`] once an interface is in use.
pub fn install_interface(interface: Arc<dyn TerminalInterface>) -> Result<()> {
    INTERFACE
        .set(interface)
        .map_err(|_| Error::InterfaceAlreadyInitialized)
}

/// Force an interface kind, falling back to the stub if it is unavailable
pub fn init_interface(kind: InterfaceKind) -> Result<Arc<dyn TerminalInterface>> {
    let interface = kind.instantiate().unwrap_or_else(|| {
        warn!(interface = kind.as_str(), "terminal interface unavailable, using stub");
        Arc::new(StubTerminal::default())
    });
    install_interface(Arc::clone(&interface))?;
    debug!(interface = kind.as_str(), "terminal interface initialized");
    Ok(interface)
}
