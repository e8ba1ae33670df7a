mod app;
mod camera;
mod config;
mod font;
mod input;
mod mesh;
mod renderer;
mod simulation;
mod timestep;

use anyhow::{Context, Result};
use config::ClientConfig;
use font::Font;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();

    let config = ClientConfig::from_env()?;
    let font = Font::load().context("failed to load HUD font")?;
    info!(
        ruleset = %config.ruleset,
        width = config.width,
        height = config.height,
        "starting pongo"
    );

    app::run(config, font)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("tracing subscriber already set");
    }
}
