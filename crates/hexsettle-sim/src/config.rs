//! Simulation settings read from the environment.

use anyhow::{bail, Context};
use hexsettle_core::RuleMode;

/// Settings for one simulated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Seeds both the board layout and every random choice during play
    pub seed: u64,
    pub players: u8,
    /// Full rounds to play after the opening placements
    pub turns: u32,
    pub rules: RuleMode,
    /// Print the final board snapshot as JSON
    pub dump: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            players: 3,
            turns: 40,
            rules: RuleMode::Strict,
            dump: false,
        }
    }
}

impl SimConfig {
    /// Read `HEXSETTLE_*` variables, falling back to defaults for unset ones
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(seed) = lookup("HEXSETTLE_SEED") {
            config.seed = seed
                .trim()
                .parse()
                .with_context(|| format!("HEXSETTLE_SEED must be an integer, got '{seed}'"))?;
        }

        if let Some(players) = lookup("HEXSETTLE_PLAYERS") {
            config.players = players
                .trim()
                .parse()
                .with_context(|| format!("HEXSETTLE_PLAYERS must be an integer, got '{players}'"))?;
        }
        if !(2..=4).contains(&config.players) {
            bail!("HEXSETTLE_PLAYERS must be between 2 and 4, got {}", config.players);
        }

        if let Some(turns) = lookup("HEXSETTLE_TURNS") {
            config.turns = turns
                .trim()
                .parse()
                .with_context(|| format!("HEXSETTLE_TURNS must be an integer, got '{turns}'"))?;
        }

        if let Some(rules) = lookup("HEXSETTLE_RULES") {
            config.rules = rules.parse()?;
        }

        if let Some(dump) = lookup("HEXSETTLE_DUMP") {
            config.dump = matches!(dump.trim(), "1" | "true");
        }

        Ok(config)
    }
}
