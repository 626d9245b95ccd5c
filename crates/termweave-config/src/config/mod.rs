pub mod app_config;

pub use app_config::{
    AppConfig, LoggingConfig, ProgressConfig, RenderConfig, ThemeConfig, CONFIG_FILE_NAME,
    CONFIG_PATH_ENV,
};
