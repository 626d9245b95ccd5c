//! Terminal handle: capabilities, theme and output in one place

use super::ansi::encode_lines;
use super::interface::{terminal_interface, TerminalInfo, TerminalInterface};
use super::live::LinePainter;
use super::RawModeGuard;
use crate::error::Result;
use crate::event::Event;
use crate::geometry::Size;
use crate::style::{ColorDepth, Lines};
use crate::theme::Theme;
use crate::widget::{self, Renderable};
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Renders widgets for a terminal and writes them to `W`
pub struct Terminal<W: Write = Stdout> {
    interface: Arc<dyn TerminalInterface>,
    info: TerminalInfo,
    theme: Theme,
    /// Fixed render width, overriding the terminal's
    width: Option<usize>,
    out: W,
    painter: LinePainter,
}

impl Terminal<Stdout> {
    /// Terminal on stdout using the process-wide interface
    pub fn new() -> Self {
        Self::with_interface(terminal_interface(), io::stdout())
    }
}

impl Default for Terminal<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Terminal<W> {
    pub fn with_interface(interface: Arc<dyn TerminalInterface>, out: W) -> Self {
        let info = interface.info();
        debug!(
            interface = interface.kind().as_str(),
            width = info.size.width,
            height = info.size.height,
            color_depth = info.color_depth.as_str(),
            ansi = info.ansi,
            "terminal ready"
        );
        Self {
            interface,
            info,
            theme: Theme::dark(),
            width: None,
            out,
            painter: LinePainter::new(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Render at `width` columns regardless of the terminal size
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Override the detected color depth; any depth but `NoColor` enables escapes
    pub fn with_color_depth(mut self, depth: ColorDepth) -> Self {
        self.info.color_depth = depth;
        if depth != ColorDepth::NoColor {
            self.info.ansi = true;
        }
        self
    }

    /// Treat the output as interactive (or not) regardless of detection
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.info.stdout_interactive = interactive;
        self
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn info(&self) -> &TerminalInfo {
        &self.info
    }

    pub fn interface(&self) -> &Arc<dyn TerminalInterface> {
        &self.interface
    }

    /// Width widgets are laid out in
    pub fn render_width(&self) -> usize {
        self.width.unwrap_or(self.info.size.width as usize)
    }

    pub fn render<R: Renderable + ?Sized>(&self, widget: &R) -> Lines {
        widget::render(widget, &self.theme, self.render_width())
    }

    /// Render to a string with escape sequences for this terminal
    pub fn render_ansi<R: Renderable + ?Sized>(&self, widget: &R) -> String {
        encode_lines(&self.render(widget), &self.info).join("\n")
    }

    pub fn print<R: Renderable + ?Sized>(&mut self, widget: &R) -> Result<()> {
        let text = self.render_ansi(widget);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    pub fn println<R: Renderable + ?Sized>(&mut self, widget: &R) -> Result<()> {
        let text = self.render_ansi(widget);
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()?;
        Ok(())
    }

    /// Replace the live frame below the cursor with `lines`
    pub fn paint(&mut self, lines: &Lines) -> Result<()> {
        self.painter.paint(&mut self.out, &self.info, lines)?;
        Ok(())
    }

    /// Erase the live frame
    pub fn clear_live(&mut self) -> Result<()> {
        self.painter.clear(&mut self.out)?;
        Ok(())
    }

    /// Leave the live frame in place and restore the cursor
    pub fn finish_live(&mut self) -> Result<()> {
        self.painter.finish(&mut self.out)?;
        Ok(())
    }

    pub fn resize(&mut self, size: Size) {
        debug!(width = size.width, height = size.height, "terminal resized");
        self.info.size = size;
    }

    /// Query the interface for the current size
    pub fn refresh_size(&mut self) {
        if let Some(size) = self.interface.size() {
            self.resize(size);
        }
    }

    pub fn enter_raw_mode(&self) -> Result<RawModeGuard> {
        self.interface.enter_raw_mode()
    }

    /// Block for the next event; resize events update the render size
    pub fn read_event(&mut self) -> Result<Event> {
        let event = self.interface.read_event()?;
        self.track_resize(&event);
        Ok(event)
    }

    pub fn poll_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        let event = self.interface.poll_event(timeout)?;
        if let Some(event) = &event {
            self.track_resize(event);
        }
        Ok(event)
    }

    fn track_resize(&mut self, event: &Event) {
        if let Event::Resize { width, height } = *event {
            self.resize(Size::new(width, height));
        }
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }
}

impl<W: Write> std::fmt::Debug for Terminal<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("interface", &self.interface.kind())
            .field("info", &self.info)
            .field("width", &self.width)
            .finish_non_exhaustive()
    }
}
