//! Application-level configuration
//!
//! Rendering defaults, theme overrides, progress layout settings and logging.

use crate::style_spec::parse_style;
use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use termweave_tui::progress::LayoutOptions;
use termweave_tui::style::ColorDepth;
use termweave_tui::terminal::InterfaceKind;
use termweave_tui::Theme;
use tracing::{debug, info};

/// Embedded default configuration file
const DEFAULT_CONFIG: &str = include_str!("../../termweave.config.toml");

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "termweave.toml";

/// Environment variable pointing at a configuration file
pub const CONFIG_PATH_ENV: &str = "TERMWEAVE_CONFIG";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the first file found, or the embedded default
    pub fn load() -> Result<Self> {
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_NAME) {
            debug!(path = CONFIG_FILE_NAME, "loading configuration");
            return Self::parse(&content, Path::new(CONFIG_FILE_NAME));
        }

        if let Some(base_dirs) = BaseDirs::new() {
            let home_config = base_dirs.home_dir().join(".termweave").join(CONFIG_FILE_NAME);
            if let Ok(content) = std::fs::read_to_string(&home_config) {
                debug!(path = %home_config.display(), "loading configuration");
                return Self::parse(&content, &home_config);
            }
        }

        if let Ok(config_path) = std::env::var(CONFIG_PATH_ENV) {
            let path = PathBuf::from(config_path);
            let content = std::fs::read_to_string(&path).with_context(|| {
                format!("Failed to read {} from {}", path.display(), CONFIG_PATH_ENV)
            })?;
            debug!(path = %path.display(), "loading configuration");
            return Self::parse(&content, &path);
        }

        debug!("no configuration file found, using defaults");
        Self::embedded()
    }

    /// The configuration shipped with the crate
    pub fn embedded() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG)
            .map_err(|e| anyhow!("Failed to parse embedded default config: {}", e))
    }

    /// Load configuration from a specific file path.
    ///
    /// A missing file is created with the default settings.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory {}", parent.display())
                    })?;
                }
                std::fs::write(path, DEFAULT_CONFIG).with_context(|| {
                    format!("Failed to create config file at {}", path.display())
                })?;
                info!(path = %path.display(), "created configuration file with default settings");
                Self::embedded()
            }
            Err(e) => Err(anyhow!("Failed to read config file {}: {}", path.display(), e)),
        }
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.render.width == Some(0) {
            return Err(anyhow!("Render width must be greater than 0"));
        }
        self.render.color_depth()?;
        self.render.interface()?;

        match self.theme.preset.as_str() {
            "default" | "dark" | "light" => {}
            other => return Err(anyhow!("Invalid theme preset: {}", other)),
        }
        for (key, spec) in &self.theme.styles {
            parse_style(spec).with_context(|| format!("Invalid style for theme key '{}'", key))?;
        }

        if self.progress.text_fps < 0 {
            return Err(anyhow!("text_fps cannot be negative, got {}", self.progress.text_fps));
        }
        if self.progress.animation_fps < 0 {
            return Err(anyhow!(
                "animation_fps cannot be negative, got {}",
                self.progress.animation_fps
            ));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(anyhow!("Invalid log level: {}", self.logging.level)),
        }

        Ok(())
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        fn var(name: &str) -> Option<String> {
            std::env::var(name).ok().filter(|v| !v.is_empty())
        }

        if let Some(width) = var("TERMWEAVE_WIDTH") {
            if let Ok(width) = width.trim().parse::<usize>() {
                self.render.width = Some(width);
            }
        }
        if let Some(depth) = var("TERMWEAVE_COLOR_DEPTH") {
            self.render.color_depth = depth;
        }
        if let Some(interface) = var("TERMWEAVE_INTERFACE") {
            self.render.interface = Some(interface);
        }
        if let Some(level) = var("TERMWEAVE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(preset) = var("TERMWEAVE_THEME") {
            self.theme.preset = preset;
        }
    }

    /// Get a summary of the configuration
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Configuration loaded:\n");
        match self.render.width {
            Some(width) => summary.push_str(&format!("Render Width: {}\n", width)),
            None => summary.push_str("Render Width: terminal\n"),
        }
        summary.push_str(&format!("Color Depth: {}\n", self.render.color_depth));
        if let Some(interface) = &self.render.interface {
            summary.push_str(&format!("Interface: {}\n", interface));
        }
        summary.push_str(&format!("Theme: {}\n", self.theme.preset));
        summary.push_str(&format!("Theme Overrides: {}\n", self.theme.override_count()));
        summary.push_str(&format!(
            "Progress: spacing {}, text {} fps, animation {} fps\n",
            self.progress.spacing, self.progress.text_fps, self.progress.animation_fps
        ));
        summary.push_str(&format!("Logging Level: {}\n", self.logging.level));
        summary
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderConfig {
    /// Fixed render width; the terminal width when unset
    #[serde(default)]
    pub width: Option<usize>,
    /// `auto` or a color depth name
    #[serde(default = "default_color_depth")]
    pub color_depth: String,
    /// Terminal interface to force
    #[serde(default)]
    pub interface: Option<String>,
}

fn default_color_depth() -> String {
    "auto".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: None,
            color_depth: default_color_depth(),
            interface: None,
        }
    }
}

impl RenderConfig {
    /// The configured depth, or `None` to use the detected one
    pub fn color_depth(&self) -> Result<Option<ColorDepth>> {
        if self.color_depth.eq_ignore_ascii_case("auto") {
            return Ok(None);
        }
        ColorDepth::from_name(&self.color_depth)
            .map(Some)
            .ok_or_else(|| anyhow!("Invalid color depth: {}", self.color_depth))
    }

    pub fn interface(&self) -> Result<Option<InterfaceKind>> {
        match &self.interface {
            None => Ok(None),
            Some(name) => InterfaceKind::from_name(name)
                .map(Some)
                .ok_or_else(|| anyhow!("Invalid terminal interface: {}", name)),
        }
    }
}

/// Theme preset and per-key overrides
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// default, dark or light
    #[serde(default = "default_preset")]
    pub preset: String,
    /// Style specs by theme key, e.g. `"panel.border" = "bold red"`
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
    #[serde(default)]
    pub dimensions: BTreeMap<String, i32>,
    #[serde(default)]
    pub strings: BTreeMap<String, String>,
    #[serde(default)]
    pub flags: BTreeMap<String, bool>,
}

fn default_preset() -> String {
    "dark".to_string()
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            preset: default_preset(),
            styles: BTreeMap::new(),
            dimensions: BTreeMap::new(),
            strings: BTreeMap::new(),
            flags: BTreeMap::new(),
        }
    }
}

impl ThemeConfig {
    fn override_count(&self) -> usize {
        self.styles.len() + self.dimensions.len() + self.strings.len() + self.flags.len()
    }

    /// Build the theme: the preset with every override applied on top
    pub fn build_theme(&self) -> Result<Theme> {
        let base = match self.preset.as_str() {
            "default" => Theme::empty(),
            "dark" => Theme::dark(),
            "light" => Theme::light(),
            other => return Err(anyhow!("Invalid theme preset: {}", other)),
        };

        let mut overrides = Theme::empty();
        for (key, spec) in &self.styles {
            let style = parse_style(spec)
                .with_context(|| format!("Invalid style for theme key '{}'", key))?;
            overrides = overrides.with_style(key.as_str(), style);
        }
        for (key, value) in &self.dimensions {
            overrides = overrides.with_dimension(key.as_str(), *value);
        }
        for (key, value) in &self.strings {
            overrides = overrides.with_string(key.as_str(), value.as_str());
        }
        for (key, value) in &self.flags {
            overrides = overrides.with_flag(key.as_str(), *value);
        }
        Ok(base.merge(&overrides))
    }
}

/// Progress layout configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressConfig {
    #[serde(default = "default_spacing")]
    pub spacing: usize,
    #[serde(default = "default_align_columns")]
    pub align_columns: bool,
    #[serde(default = "default_text_fps")]
    pub text_fps: i32,
    #[serde(default = "default_animation_fps")]
    pub animation_fps: i32,
}

fn default_spacing() -> usize {
    2
}

fn default_align_columns() -> bool {
    true
}

fn default_text_fps() -> i32 {
    termweave_tui::progress::TEXT_FPS as i32
}

fn default_animation_fps() -> i32 {
    termweave_tui::progress::ANIMATION_FPS as i32
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            spacing: default_spacing(),
            align_columns: default_align_columns(),
            text_fps: default_text_fps(),
            animation_fps: default_animation_fps(),
        }
    }
}

impl ProgressConfig {
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            spacing: self.spacing,
            align_columns: self.align_columns,
            text_fps: self.text_fps,
            animation_fps: self.animation_fps,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
