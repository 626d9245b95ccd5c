use anyhow::Result;
use clap::Parser;
use std::env;
use termweave::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    // Initialize logging based on config; the directive also covers the
    // termweave_tui and termweave_config targets
    let default_directive = format!("termweave={}", config.logging.level.to_lowercase());
    let env_override = env::var("RUST_LOG").unwrap_or_default();
    let combined_filter = if env_override.trim().is_empty() {
        default_directive
    } else if env_override.contains("termweave") {
        env_override
    } else {
        format!("{},{}", env_override, default_directive)
    };

    // Rendered output owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(combined_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    cli.run(&config).await
}
