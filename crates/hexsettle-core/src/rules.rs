//! Rule strictness configuration.
//!
//! The resolver can run with the loose checks of a prototype table (only costs
//! are enforced) or with full placement, trade and stock validation. Each check
//! is its own switch so callers can mix the two.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which optional checks the resolver performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    /// Both sides of a trade must exist, differ, and hold what they offer
    pub validate_trades: bool,
    /// Roads and settlements must be on valid, free, connected land locations
    pub validate_placement: bool,
    /// Settlements a player may place before a connecting road is required
    pub opening_settlements: u32,
    /// A city must replace the player's own settlement
    pub city_requires_settlement: bool,
    /// A bought development card must still be in the draw stock
    pub dev_card_requires_stock: bool,
    /// The tile under the robber produces nothing
    pub robber_blocks_production: bool,
    /// Robbing a player with an empty hand is an error rather than a no-op
    pub reject_empty_robbery: bool,
}

impl RuleSet {
    /// Only costs and player existence are checked
    pub const fn permissive() -> Self {
        Self {
            validate_trades: false,
            validate_placement: false,
            opening_settlements: 2,
            city_requires_settlement: false,
            dev_card_requires_stock: false,
            robber_blocks_production: false,
            reject_empty_robbery: false,
        }
    }

    /// Every check enabled
    pub const fn strict() -> Self {
        Self {
            validate_trades: true,
            validate_placement: true,
            opening_settlements: 2,
            city_requires_settlement: true,
            dev_card_requires_stock: true,
            robber_blocks_production: true,
            reject_empty_robbery: true,
        }
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::permissive()
    }
}

/// Named presets, parsed from configuration strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleMode {
    Permissive,
    Strict,
}

impl RuleMode {
    pub fn rules(self) -> RuleSet {
        match self {
            RuleMode::Permissive => RuleSet::permissive(),
            RuleMode::Strict => RuleSet::strict(),
        }
    }
}

impl From<RuleMode> for RuleSet {
    fn from(mode: RuleMode) -> Self {
        mode.rules()
    }
}

impl fmt::Display for RuleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleMode::Permissive => write!(f, "permissive"),
            RuleMode::Strict => write!(f, "strict"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown rule mode '{0}' (expected 'permissive' or 'strict')")]
pub struct ParseRuleModeError(String);

impl FromStr for RuleMode {
    type Err = ParseRuleModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(RuleMode::Permissive),
            "strict" => Ok(RuleMode::Strict),
            _ => Err(ParseRuleModeError(s.to_string())),
        }
    }
}
