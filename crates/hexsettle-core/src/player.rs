//! Player state and resource management.
//!
//! This module contains:
//! - Player struct with resources and development cards
//! - ResourceHand for managing resource counts
//! - Development card types and the standard draw stock
//! - Building costs

use crate::board::{PlayerId, Resource};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Development card types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DevelopmentCard {
    /// Move robber and steal
    Knight,
    /// Take any 2 resources from the bank
    YearOfPlenty,
    /// All players must give you all of one resource type
    Monopoly,
    /// Build 2 roads for free
    RoadBuilding,
    /// Worth 1 VP
    VictoryPoint,
}

impl DevelopmentCard {
    /// Create the standard development card stock (25 cards)
    pub fn standard_deck() -> Vec<DevelopmentCard> {
        let mut deck = Vec::with_capacity(25);

        // 14 Knights
        deck.extend(std::iter::repeat(DevelopmentCard::Knight).take(14));

        // 5 Victory Points
        deck.extend(std::iter::repeat(DevelopmentCard::VictoryPoint).take(5));

        // 2 Road Building
        deck.extend(std::iter::repeat(DevelopmentCard::RoadBuilding).take(2));

        // 2 Year of Plenty
        deck.extend(std::iter::repeat(DevelopmentCard::YearOfPlenty).take(2));

        // 2 Monopoly
        deck.extend(std::iter::repeat(DevelopmentCard::Monopoly).take(2));

        deck
    }

    /// Shuffle a deck
    pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [DevelopmentCard], rng: &mut R) {
        deck.shuffle(rng);
    }
}

/// A hand of resources, one non-negative counter per resource
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceHand {
    pub brick: u32,
    pub grain: u32,
    pub lumber: u32,
    pub ore: u32,
    pub wool: u32,
}

impl ResourceHand {
    /// Create an empty hand
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hand with specific amounts
    pub fn with_amounts(brick: u32, grain: u32, lumber: u32, ore: u32, wool: u32) -> Self {
        Self {
            brick,
            grain,
            lumber,
            ore,
            wool,
        }
    }

    /// Create a hand with a single resource
    pub fn single(resource: Resource, amount: u32) -> Self {
        let mut hand = Self::new();
        *hand.count_mut(resource) = amount;
        hand
    }

    /// Total number of resource cards. Wide enough that five full counters
    /// cannot overflow it.
    pub fn total(&self) -> u64 {
        Resource::ALL
            .iter()
            .map(|&resource| u64::from(self.get(resource)))
            .sum()
    }

    /// Check if hand is empty
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Get count of a specific resource
    pub fn get(&self, resource: Resource) -> u32 {
        match resource {
            Resource::Brick => self.brick,
            Resource::Grain => self.grain,
            Resource::Lumber => self.lumber,
            Resource::Ore => self.ore,
            Resource::Wool => self.wool,
        }
    }

    fn count_mut(&mut self, resource: Resource) -> &mut u32 {
        match resource {
            Resource::Brick => &mut self.brick,
            Resource::Grain => &mut self.grain,
            Resource::Lumber => &mut self.lumber,
            Resource::Ore => &mut self.ore,
            Resource::Wool => &mut self.wool,
        }
    }

    /// Try to add resources, returning false (and leaving the hand untouched)
    /// if the counter would overflow
    pub fn try_add(&mut self, resource: Resource, amount: u32) -> bool {
        let count = self.count_mut(resource);
        match count.checked_add(amount) {
            Some(sum) => {
                *count = sum;
                true
            }
            None => false,
        }
    }

    /// Try to add another hand to this one, all counters or none
    pub fn try_add_hand(&mut self, other: &ResourceHand) -> bool {
        let mut sum = *self;
        for resource in Resource::ALL {
            if !sum.try_add(resource, other.get(resource)) {
                return false;
            }
        }
        *self = sum;
        true
    }

    /// Check if can afford a cost
    pub fn can_afford(&self, cost: &ResourceHand) -> bool {
        self.brick >= cost.brick
            && self.grain >= cost.grain
            && self.lumber >= cost.lumber
            && self.ore >= cost.ore
            && self.wool >= cost.wool
    }

    /// Try to subtract, returning false (and leaving the hand untouched) if insufficient
    pub fn try_subtract(&mut self, cost: &ResourceHand) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.brick -= cost.brick;
        self.grain -= cost.grain;
        self.lumber -= cost.lumber;
        self.ore -= cost.ore;
        self.wool -= cost.wool;
        true
    }

    /// The resource of the card at `index`, counting cards grouped in
    /// `Resource::ALL` order. `None` once `index` reaches `total()`.
    pub fn card_at(&self, index: u64) -> Option<Resource> {
        let mut remaining = index;
        for resource in Resource::ALL {
            let count = u64::from(self.get(resource));
            if remaining < count {
                return Some(resource);
            }
            remaining -= count;
        }
        None
    }
}

/// Building costs
pub mod costs {
    use super::ResourceHand;

    /// Cost to build a road: 1 brick, 1 lumber
    pub fn road() -> ResourceHand {
        ResourceHand::with_amounts(1, 0, 1, 0, 0)
    }

    /// Cost to build a settlement: 1 brick, 1 grain, 1 lumber, 1 wool
    pub fn settlement() -> ResourceHand {
        ResourceHand::with_amounts(1, 1, 1, 0, 1)
    }

    /// Cost to upgrade to city: 2 grain, 3 ore
    pub fn city() -> ResourceHand {
        ResourceHand::with_amounts(0, 2, 0, 3, 0)
    }

    /// Cost to buy a development card: 1 grain, 1 ore, 1 wool
    pub fn development_card() -> ResourceHand {
        ResourceHand::with_amounts(0, 1, 0, 1, 1)
    }
}

/// Development cards a player holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevCardHand {
    /// Cards not yet played, in the order they were acquired
    pub in_hand: Vec<DevelopmentCard>,
    /// Cards already played, in the order they were played
    pub played: Vec<DevelopmentCard>,
}

/// A single player's state.
///
/// Roads, settlements and cities live on the `Board`, keyed by location and
/// tagged with their owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player ID, unique within a board
    pub id: PlayerId,
    /// Current resources
    pub resources: ResourceHand,
    /// Development cards
    pub dev_cards: DevCardHand,
}

impl Player {
    /// Create a new player with nothing in hand
    pub fn new(id: PlayerId) -> Self {
        Self::with_resources(id, ResourceHand::new())
    }

    /// Create a player holding the given resources
    pub fn with_resources(id: PlayerId, resources: ResourceHand) -> Self {
        Self {
            id,
            resources,
            dev_cards: DevCardHand::default(),
        }
    }

    /// Can this player pay `cost`?
    pub fn can_afford(&self, cost: &ResourceHand) -> bool {
        self.resources.can_afford(cost)
    }
}
