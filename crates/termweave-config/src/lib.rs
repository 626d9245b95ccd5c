//! Configuration for termweave: file lookup, environment overrides and theme
//! construction from style specifications.

pub mod config;
pub mod style_spec;
pub mod test_utils;

pub use config::{AppConfig, LoggingConfig, ProgressConfig, RenderConfig, ThemeConfig};
pub use style_spec::{parse_color, parse_style, StyleParseError};
