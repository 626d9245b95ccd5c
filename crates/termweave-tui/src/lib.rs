//! termweave-tui: declarative terminal rendering on crossterm
//!
//! - Styles and colors with theme overrides and color depth downsampling
//! - Widgets (`Text`, `Panel`, `Table`, `Stack`, progress bars) measured and
//!   rendered to width-exact styled lines
//! - Progress layouts with per-cell refresh rates and a live animator
//! - Terminal capability probing with a process-wide interface and a stub
//!   fallback

pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod progress;
pub mod style;
pub mod terminal;
pub mod theme;
pub mod widget;

pub use error::{Error, Result};
pub use event::Event;
pub use geometry::Size;
pub use layout::{Alignment, ColumnWidth, Padding};
pub use progress::{
    progress_bar_context_layout, progress_bar_layout, LayoutOptions, ProgressAnimator,
    ProgressBarDefinition, ProgressState, TaskId,
};
pub use style::{Color, ColorDepth, Line, Lines, Modifier, Span, Style};
pub use terminal::{terminal_interface, Terminal, TerminalInfo, TerminalInterface};
pub use theme::Theme;
pub use widget::{render, Measurement, Renderable, Widget};
