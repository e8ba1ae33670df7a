//! Desktop client configuration

use anyhow::{Context, Result};
use game_core::{Params, Ruleset};

/// Environment variable selecting the ruleset (`classic` or `refined`)
pub const RULESET_ENV: &str = "PONGO_RULESET";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub tick_rate: u32,
    pub ruleset: Ruleset,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            title: "Pongo ~ Pong in Rust".to_string(),
            width: Params::ARENA_WIDTH as u32,
            height: Params::ARENA_HEIGHT as u32,
            tick_rate: Params::TICK_RATE,
            ruleset: Ruleset::default(),
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(RULESET_ENV) {
            config.ruleset = value
                .parse()
                .with_context(|| format!("invalid {RULESET_ENV}"))?;
        }
        Ok(config)
    }
}
