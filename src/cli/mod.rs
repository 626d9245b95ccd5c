//! Command-line interface: argument parsing, configuration and subcommands

pub mod formatting;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use termweave_config::AppConfig;
use termweave_tui::progress::{progress_bar_context_layout, LayoutOptions};
use termweave_tui::terminal::{init_interface, terminal_interface};
use termweave_tui::widget::{BorderType, Panel, Spinner, Text, Whitespace};
use termweave_tui::{
    Alignment, ColumnWidth, Event, Padding, ProgressState, TaskId, Terminal, TerminalInterface,
};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "termweave")]
#[command(about = "Render panels, tables and live progress bars in the terminal")]
#[command(version)]
pub struct Cli {
    /// Configuration file; created with defaults if it does not exist
    #[arg(long, short = 'c', value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Render width in columns instead of the terminal width
    #[arg(long, short = 'w', global = true)]
    pub width: Option<usize>,

    /// auto, none, ansi16, ansi256 or truecolor
    #[arg(long, value_name = "DEPTH", global = true)]
    pub color_depth: Option<String>,

    /// Terminal interface to force: posix, windows or stub
    #[arg(long, global = true)]
    pub interface: Option<String>,

    /// Theme preset: default, dark or light
    #[arg(long, global = true)]
    pub theme: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show what the terminal supports
    Probe {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Then echo key and resize events in raw mode until Ctrl+C
        #[arg(long, conflicts_with = "json")]
        events: bool,
    },
    /// Print text inside a bordered panel
    Panel(PanelArgs),
    /// Print delimited records as a table (read from stdin when none are given)
    Table(TableArgs),
    /// Animate a few simulated tasks
    Progress(ProgressArgs),
    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct PanelArgs {
    pub text: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub bottom_title: Option<String>,

    /// ascii, square, rounded, double, heavy or none
    #[arg(long, default_value = "rounded")]
    pub border: String,

    /// left, center, right or justify
    #[arg(long, default_value = "left")]
    pub align: String,

    /// normal, nowrap, pre, pre-wrap or pre-line
    #[arg(long, default_value = "normal")]
    pub whitespace: String,

    /// Blank cells around the text
    #[arg(long, default_value_t = 0)]
    pub padding: usize,

    /// Fill the render width
    #[arg(long)]
    pub expand: bool,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct TableArgs {
    pub records: Vec<String>,

    /// Cell delimiter
    #[arg(long, short = 'd', default_value_t = ',')]
    pub delimiter: char,

    /// Use the first record as the header
    #[arg(long)]
    pub header: bool,

    /// ascii, square, rounded, double, heavy or none
    #[arg(long, default_value = "none")]
    pub border: String,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct ProgressArgs {
    #[arg(long, default_value_t = 3)]
    pub tasks: usize,

    /// Units of work per task
    #[arg(long, default_value_t = 100)]
    pub total: u64,

    /// Units per second for the first task; later tasks run faster
    #[arg(long, default_value_t = 40.0)]
    pub rate: f64,

    /// Milliseconds between simulated updates
    #[arg(long, default_value_t = 50)]
    pub step_ms: u64,
}

impl Default for ProgressArgs {
    fn default() -> Self {
        Self {
            tasks: 3,
            total: 100,
            rate: 40.0,
            step_ms: 50,
        }
    }
}

impl Cli {
    /// Load configuration from `--config` or the lookup path, then apply
    /// environment and command-line overrides and validate the result
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => AppConfig::load()?,
        };
        config.apply_env_overrides();
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Command-line options win over file and environment settings
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(width) = self.width {
            config.render.width = Some(width);
        }
        if let Some(depth) = &self.color_depth {
            config.render.color_depth = depth.clone();
        }
        if let Some(interface) = &self.interface {
            config.render.interface = Some(interface.clone());
        }
        if let Some(preset) = &self.theme {
            config.theme.preset = preset.clone();
        }
    }

    /// Run the subcommand against stdout
    pub async fn run(&self, config: &AppConfig) -> Result<()> {
        let interface = resolve_interface(config)?;
        let terminal = build_terminal(config, interface, io::stdout())?;
        execute(&self.command, config, terminal).await?;
        Ok(())
    }
}

/// The configured interface if one is forced, otherwise the probed one
pub fn resolve_interface(config: &AppConfig) -> Result<Arc<dyn TerminalInterface>> {
    match config.render.interface()? {
        Some(kind) => Ok(init_interface(kind)?),
        None => Ok(terminal_interface()),
    }
}

/// A terminal on `out` with the configured theme, width and color depth
pub fn build_terminal<W: Write>(
    config: &AppConfig,
    interface: Arc<dyn TerminalInterface>,
    out: W,
) -> Result<Terminal<W>> {
    let mut terminal =
        Terminal::with_interface(interface, out).with_theme(config.theme.build_theme()?);
    if let Some(width) = config.render.width {
        terminal = terminal.with_width(width);
    }
    if let Some(depth) = config.render.color_depth()? {
        terminal = terminal.with_color_depth(depth);
    }
    Ok(terminal)
}

/// Run `command` on `terminal` and hand back its writer
pub async fn execute<W: Write>(
    command: &Command,
    config: &AppConfig,
    mut terminal: Terminal<W>,
) -> Result<W> {
    debug!(command = ?command, "running command");
    match command {
        Command::Probe { json, events } => {
            let kind = terminal.interface().kind();
            let info = *terminal.info();
            let width = terminal.render_width();
            if *json {
                let report = formatting::probe_json(kind, &info, width);
                let text = serde_json::to_string_pretty(&report)?;
                writeln!(terminal.writer(), "{}", text)?;
            } else {
                terminal.println(&formatting::probe_table(kind, &info, width))?;
            }
            if *events {
                echo_events(&mut terminal)?;
            }
        }
        Command::Panel(args) => terminal.println(&panel(args)?)?,
        Command::Table(args) => {
            let records = if args.records.is_empty() {
                read_records(io::stdin().lock())?
            } else {
                args.records.clone()
            };
            let border = border_type(&args.border)?;
            let table = formatting::record_table(&records, args.delimiter, args.header, border);
            terminal.println(&table)?;
        }
        Command::Progress(args) => {
            let terminal = run_progress(terminal, config.progress.layout_options(), args).await?;
            return Ok(terminal.into_writer());
        }
        Command::Config => terminal.println(&formatting::config_panel(&config.summary()))?,
    }
    Ok(terminal.into_writer())
}

/// Print each event until a quit key or the end of input
fn echo_events<W: Write>(terminal: &mut Terminal<W>) -> Result<()> {
    if !terminal.info().stdin_interactive {
        bail!("stdin is not a terminal");
    }
    let _raw = terminal.enter_raw_mode()?;
    writeln!(terminal.writer(), "press keys or resize, ctrl+c to stop\r")?;
    loop {
        let event = terminal.read_event()?;
        if event.is_quit() {
            break;
        }
        let text = match event {
            Event::Key(key) => format!("key {:?} {:?}", key.code, key.modifiers),
            Event::Resize { width, height } => format!("resize {}x{}", width, height),
            Event::Eof => break,
        };
        // raw mode does not translate newlines
        write!(terminal.writer(), "{}\r\n", text)?;
        terminal.writer().flush()?;
    }
    Ok(())
}

fn border_type(name: &str) -> Result<Option<BorderType>> {
    if name.eq_ignore_ascii_case("none") {
        return Ok(None);
    }
    BorderType::from_name(name)
        .map(Some)
        .ok_or_else(|| anyhow!("Unknown border type: {}", name))
}

pub fn panel(args: &PanelArgs) -> Result<Panel> {
    let align = Alignment::from_name(&args.align)
        .ok_or_else(|| anyhow!("Unknown alignment: {}", args.align))?;
    let whitespace = Whitespace::from_name(&args.whitespace)
        .ok_or_else(|| anyhow!("Unknown whitespace mode: {}", args.whitespace))?;

    let text = Text::new(args.text.as_str())
        .align(align)
        .whitespace(whitespace);
    let mut panel = Panel::new(text)
        .border(border_type(&args.border)?)
        .padding(Padding::symmetric(0, args.padding))
        .expand(args.expand);
    if let Some(title) = &args.title {
        panel = panel.title(title.as_str());
    }
    if let Some(title) = &args.bottom_title {
        panel = panel.bottom_title(title.as_str());
    }
    Ok(panel)
}

fn read_records(reader: impl BufRead) -> Result<Vec<String>> {
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line.context("Failed to read table records")?;
        if !line.trim().is_empty() {
            records.push(line);
        }
    }
    Ok(records)
}

fn task_name(index: usize) -> String {
    format!("task {}", index + 1)
}

/// Animate `args.tasks` simulated tasks until all of them finish.
///
/// Task `i` advances at `rate * (1 + i / 2)` units per second.
pub async fn run_progress<W: Write>(
    terminal: Terminal<W>,
    options: LayoutOptions,
    args: &ProgressArgs,
) -> Result<Terminal<W>> {
    if !(args.rate.is_finite() && args.rate > 0.0) {
        bail!("Progress rate must be positive, got {}", args.rate);
    }

    let definition = progress_bar_context_layout::<String, _>(options, |scope| {
        scope.spinner(Spinner::dots());
        scope.cell(ColumnWidth::Auto, 0, None, |state: &ProgressState<String>| {
            Text::new(state.context.as_str()).into()
        })?;
        scope
            .percentage()
            .progress_bar()
            .completed("")
            .speed("it")
            .time_remaining();
        Ok(())
    })?;

    if args.tasks == 0 {
        return Ok(terminal);
    }

    let animator = terminal.animator(definition);
    let start = Instant::now();
    let ids: Vec<TaskId> = (0..args.tasks)
        .map(|i| {
            let state = ProgressState::new(task_name(i), Some(args.total), 0, start);
            animator.add_task(state.started(start))
        })
        .collect();
    info!(tasks = args.tasks, total = args.total, "starting simulated progress");

    let producer = {
        let animator = animator.clone();
        let step = Duration::from_millis(args.step_ms.max(1));
        let (total, rate) = (args.total, args.rate);
        async move {
            let mut done = vec![0.0_f64; ids.len()];
            loop {
                tokio::time::sleep(step).await;
                let now = Instant::now();
                for (i, id) in ids.iter().enumerate() {
                    let speed = rate * (1.0 + i as f64 / 2.0);
                    done[i] = (done[i] + speed * step.as_secs_f64()).min(total as f64);
                    let completed = done[i] as u64;
                    let mut state = ProgressState::new(task_name(i), Some(total), completed, now)
                        .started(start)
                        .speed(speed);
                    if completed >= total {
                        state = state.finished(now);
                    }
                    animator.update(*id, state);
                }
                if animator.is_finished() {
                    break;
                }
            }
        }
    };

    animator.run(producer).await?;
    animator
        .into_terminal()
        .ok_or_else(|| anyhow!("progress display is still shared"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_global_options_after_subcommand() {
        let cli = Cli::try_parse_from([
            "termweave",
            "panel",
            "hello",
            "--title",
            "greeting",
            "--width",
            "40",
            "--color-depth",
            "ansi256",
        ])
        .unwrap();
        assert_eq!(cli.width, Some(40));
        assert_eq!(cli.color_depth.as_deref(), Some("ansi256"));
        match cli.command {
            Command::Panel(args) => {
                assert_eq!(args.text, "hello");
                assert_eq!(args.title.as_deref(), Some("greeting"));
                assert_eq!(args.border, "rounded");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_table_records() {
        let cli =
            Cli::try_parse_from(["termweave", "table", "--header", "-d", ";", "a;b", "1;2"])
                .unwrap();
        assert_eq!(
            cli.command,
            Command::Table(TableArgs {
                records: vec!["a;b".into(), "1;2".into()],
                delimiter: ';',
                header: true,
                border: "none".into(),
            })
        );
    }

    #[test]
    fn test_progress_defaults() {
        let cli = Cli::try_parse_from(["termweave", "progress"]).unwrap();
        assert_eq!(cli.command, Command::Progress(ProgressArgs::default()));
    }

    #[test]
    fn test_overrides_win() {
        let cli = Cli::try_parse_from([
            "termweave",
            "--theme",
            "light",
            "--interface",
            "stub",
            "config",
        ])
        .unwrap();
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.theme.preset, "light");
        assert_eq!(config.render.interface.as_deref(), Some("stub"));
        assert!(config.render.width.is_none());
    }

    #[test]
    fn test_border_names() {
        assert_eq!(border_type("none").unwrap(), None);
        assert_eq!(border_type("Double").unwrap(), Some(BorderType::Double));
        assert!(border_type("dotted").is_err());
    }

    #[test]
    fn test_panel_rejects_unknown_alignment() {
        let args = PanelArgs {
            text: "x".into(),
            title: None,
            bottom_title: None,
            border: "rounded".into(),
            align: "middle".into(),
            whitespace: "normal".into(),
            padding: 0,
            expand: false,
        };
        assert!(panel(&args).is_err());
    }

    #[test]
    fn test_read_records_skips_blank_lines() {
        let input = io::Cursor::new("a,b\n\n  \nc,d\n");
        assert_eq!(read_records(input).unwrap(), vec!["a,b", "c,d"]);
    }
}
