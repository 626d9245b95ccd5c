//! Terminal capabilities, output encoding and live repainting

mod ansi;
mod backend;
mod detect;
mod interface;
mod live;
#[cfg(unix)]
mod posix;
mod raw_mode;
mod stub;
#[cfg(windows)]
mod windows;

pub use ansi::{encode_line, encode_lines, write_line};
pub use backend::Terminal;
pub use detect::{detect_ansi_support, detect_color_depth, EnvHints};
pub use interface::{
    init_interface, install_interface, select_interface, terminal_interface, InterfaceKind,
    Probe, TerminalInfo, TerminalInterface, INTERFACE_ENV, PROBES,
};
pub use live::LinePainter;
#[cfg(unix)]
pub use posix::PosixTerminal;
pub use raw_mode::RawModeGuard;
pub use stub::StubTerminal;
#[cfg(windows)]
pub use windows::WindowsTerminal;
