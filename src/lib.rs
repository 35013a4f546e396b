//! # formpilot
//!
//! Bootstrap and terminal shell for the FormPilot registration, details
//! and payment flow.

pub mod bootstrap;
pub mod shell;

use tokio::io::BufReader;

use bootstrap::tracing::init_tracing_subscriber;
use bootstrap::{build_app, load_config_or_empty, resolve_config_path, CONFIG_ENV};
use shell::Shell;

/// Load config, install tracing, wire the App and drive it from stdin.
pub async fn run() -> anyhow::Result<()> {
    let config_path = resolve_config_path(std::env::var(CONFIG_ENV).ok(), std::env::args().skip(1));
    let config = load_config_or_empty(config_path)?;

    init_tracing_subscriber(&config.log_dir)?;
    tracing::info!("starting formpilot");

    let app = build_app(&config)?;
    Shell::new(app)
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
