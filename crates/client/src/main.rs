//! Rotation simulator binary.
//!
//! Replays a scenario through the rotation engine and prints the main-cycle
//! and weave decision of every tick.
//!
//! # Examples
//!
//! ```bash
//! # Bundled scenario, text table
//! cargo run -p rotation-client -- pack_pull
//!
//! # Custom files, JSON output
//! SIM_ENGINE_CONFIG=engine.toml SIM_OUTPUT=json cargo run -p rotation-client -- raid.ron
//! ```
mod config;
mod output;

use anyhow::{Context, Result};
use runtime::Session;

use crate::config::{ScenarioSource, SimConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = SimConfig::from_env();
    if let Some(arg) = std::env::args().nth(1) {
        config.scenario = ScenarioSource::parse(&arg);
    }
    tracing::debug!("Simulator config: {:?}", config);

    let engine_config = config.engine_config()?;
    let scenario = config.scenario.load()?;
    let mut session =
        Session::new(engine_config, scenario).context("Failed to start simulation session")?;

    let reports = session.run();

    let stdout = std::io::stdout();
    output::write(&mut stdout.lock(), config.output, &session, &reports)
}
