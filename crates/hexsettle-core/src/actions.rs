//! Actions players declare and the effects they resolve into.
//!
//! An `Action` is an intent that has not been checked against the board yet.
//! Resolving one yields an ordered list of `Effect`s, each an atomic state delta
//! that can be applied, stored, or replayed.

use crate::board::PlayerId;
use crate::hex::{EdgeCoord, VertexCoord};
use crate::player::{DevelopmentCard, ResourceHand};
use serde::{Deserialize, Serialize};

/// A roll of two dice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roll {
    pub a: u8,
    pub b: u8,
}

impl Roll {
    pub fn new(a: u8, b: u8) -> Self {
        Self { a, b }
    }

    pub fn total(&self) -> u8 {
        self.a.saturating_add(self.b)
    }

    /// Both dice show a face from 1 to 6
    pub fn is_valid(&self) -> bool {
        (1..=6).contains(&self.a) && (1..=6).contains(&self.b)
    }
}

/// `robber` takes one random resource from `victim`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rob {
    pub robber: PlayerId,
    pub victim: PlayerId,
}

/// One side of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub player: PlayerId,
    pub resources: ResourceHand,
}

/// An exchange of resources between two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    pub party: Offer,
    pub counterparty: Offer,
}

/// A development card purchase. The card is drawn by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyDevCard {
    pub player: PlayerId,
    pub card: DevelopmentCard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRoad {
    pub player: PlayerId,
    pub road: EdgeCoord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettlement {
    pub player: PlayerId,
    pub settlement: VertexCoord,
}

/// Upgrade of a settlement to a city
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildCity {
    pub player: PlayerId,
    pub city: VertexCoord,
}

/// All possible actions a player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Roll the dice; every matching tile pays out
    Roll(Roll),
    /// Steal a random resource
    Rob(Rob),
    /// Swap resources between two players
    Trade(Trade),
    /// Buy a development card
    BuyDevCard(BuyDevCard),
    /// Build a road at an edge
    BuildRoad(BuildRoad),
    /// Build a settlement at a vertex
    BuildSettlement(BuildSettlement),
    /// Build a city at a vertex
    BuildCity(BuildCity),
}

impl Action {
    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Roll(_) => "roll",
            Action::Rob(_) => "rob",
            Action::Trade(_) => "trade",
            Action::BuyDevCard(_) => "buy_dev_card",
            Action::BuildRoad(_) => "build_road",
            Action::BuildSettlement(_) => "build_settlement",
            Action::BuildCity(_) => "build_city",
        }
    }
}

impl From<Roll> for Action {
    fn from(roll: Roll) -> Self {
        Action::Roll(roll)
    }
}

impl From<Rob> for Action {
    fn from(rob: Rob) -> Self {
        Action::Rob(rob)
    }
}

impl From<Trade> for Action {
    fn from(trade: Trade) -> Self {
        Action::Trade(trade)
    }
}

impl From<BuyDevCard> for Action {
    fn from(buy: BuyDevCard) -> Self {
        Action::BuyDevCard(buy)
    }
}

impl From<BuildRoad> for Action {
    fn from(build: BuildRoad) -> Self {
        Action::BuildRoad(build)
    }
}

impl From<BuildSettlement> for Action {
    fn from(build: BuildSettlement) -> Self {
        Action::BuildSettlement(build)
    }
}

impl From<BuildCity> for Action {
    fn from(build: BuildCity) -> Self {
        Action::BuildCity(build)
    }
}

/// A state change that can be applied to a board.
///
/// Effects are deltas against the board they were resolved from and must be
/// applied in the order they were returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// A player gains resources
    AddResources {
        player: PlayerId,
        resources: ResourceHand,
    },
    /// A player loses resources
    RemoveResources {
        player: PlayerId,
        resources: ResourceHand,
    },
    /// A player gains a development card
    AddDevCard {
        player: PlayerId,
        card: DevelopmentCard,
    },
    /// A player gains a road
    AddRoad { player: PlayerId, road: EdgeCoord },
    /// A player gains a settlement
    AddSettlement {
        player: PlayerId,
        settlement: VertexCoord,
    },
    /// A player gains a city
    AddCity { player: PlayerId, city: VertexCoord },
}

impl Effect {
    /// The player this effect applies to
    pub fn player(&self) -> PlayerId {
        match self {
            Effect::AddResources { player, .. }
            | Effect::RemoveResources { player, .. }
            | Effect::AddDevCard { player, .. }
            | Effect::AddRoad { player, .. }
            | Effect::AddSettlement { player, .. }
            | Effect::AddCity { player, .. } => *player,
        }
    }
}
