//! Turns actions into effects.
//!
//! Every resolution is a pure function of the board it is given: the board is
//! never modified, and the returned effects are deltas against that exact
//! board. Robbery is the only random step and takes its RNG from the caller.

use crate::actions::{
    Action, BuildCity, BuildRoad, BuildSettlement, BuyDevCard, Effect, Rob, Roll, Trade,
};
use crate::board::{
    find_adjacent_cities, find_adjacent_settlements, Board, PlayerId, Resource, VertexBuilding,
};
use crate::game::GameError;
use crate::hex::VertexCoord;
use crate::player::{costs, ResourceHand};
use crate::rules::RuleSet;
use rand::Rng;
use tracing::{debug, trace};

/// Resolves actions under a fixed set of rules
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Resolver {
    rules: RuleSet,
}

impl Resolver {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Resolve any action
    pub fn resolve<R: Rng + ?Sized>(
        &self,
        board: &Board,
        action: &Action,
        rng: &mut R,
    ) -> Result<Vec<Effect>, GameError> {
        let result = match action {
            Action::Roll(roll) => self.roll(board, roll),
            Action::Rob(rob) => self.rob(board, rob, rng),
            Action::Trade(trade) => self.trade(board, trade),
            Action::BuyDevCard(buy) => self.buy_dev_card(board, buy),
            Action::BuildRoad(build) => self.build_road(board, build),
            Action::BuildSettlement(build) => self.build_settlement(board, build),
            Action::BuildCity(build) => self.build_city(board, build),
        };

        match &result {
            Ok(effects) => debug!(action = action.kind(), effects = effects.len(), "resolved"),
            Err(err) => debug!(action = action.kind(), %err, "rejected"),
        }

        result
    }

    /// Pay out every tile whose number matches the dice.
    ///
    /// For each matching tile, in board order, and each player, in seating order,
    /// a player's cities there earn 2 of the tile's resource each and their
    /// settlements 1 each. One effect is emitted per player and building kind.
    pub fn roll(&self, board: &Board, roll: &Roll) -> Result<Vec<Effect>, GameError> {
        if !roll.is_valid() {
            return Err(GameError::InvalidRoll {
                a: roll.a,
                b: roll.b,
            });
        }

        let sum = roll.total();
        let mut effects = Vec::new();

        for tile in board.tiles().iter().filter(|t| t.dice_number == Some(sum)) {
            let Some(resource) = tile.resource() else {
                continue;
            };
            if self.rules.robber_blocks_production && tile.coord == board.robber() {
                trace!(coord = ?tile.coord, "robber blocks production");
                continue;
            }

            for player in board.players() {
                let cities = find_adjacent_cities(tile.coord, &board.cities_of(player.id));
                if !cities.is_empty() {
                    effects.push(pay(player.id, resource, count(&cities).saturating_mul(2)));
                }

                let settlements =
                    find_adjacent_settlements(tile.coord, &board.settlements_of(player.id));
                if !settlements.is_empty() {
                    effects.push(pay(player.id, resource, count(&settlements)));
                }
            }
        }

        Ok(effects)
    }

    /// Move one uniformly chosen resource card from the victim to the robber.
    ///
    /// A victim with nothing in hand yields no effects, or `EmptyVictimHand`
    /// when `reject_empty_robbery` is set.
    pub fn rob<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rob: &Rob,
        rng: &mut R,
    ) -> Result<Vec<Effect>, GameError> {
        board.player(rob.robber)?;
        let victim = board.player(rob.victim)?;

        let held = victim.resources.total();
        if held == 0 {
            if self.rules.reject_empty_robbery {
                return Err(GameError::EmptyVictimHand(rob.victim));
            }
            return Ok(Vec::new());
        }

        let stolen = victim
            .resources
            .card_at(rng.gen_range(0..held))
            .ok_or(GameError::EmptyVictimHand(rob.victim))?;

        let taken = ResourceHand::single(stolen, 1);
        Ok(vec![
            Effect::RemoveResources {
                player: rob.victim,
                resources: taken,
            },
            Effect::AddResources {
                player: rob.robber,
                resources: taken,
            },
        ])
    }

    /// Swap both offers. Holdings are only checked when `validate_trades` is set.
    pub fn trade(&self, board: &Board, trade: &Trade) -> Result<Vec<Effect>, GameError> {
        let Trade {
            party,
            counterparty,
        } = trade;

        if self.rules.validate_trades {
            if party.player == counterparty.player {
                return Err(GameError::InvalidTrade);
            }
            for offer in [party, counterparty] {
                let player = board.player(offer.player)?;
                if !player.can_afford(&offer.resources) {
                    return Err(GameError::InsufficientResources {
                        player: offer.player,
                    });
                }
            }
        }

        Ok(vec![
            Effect::AddResources {
                player: party.player,
                resources: counterparty.resources,
            },
            Effect::RemoveResources {
                player: party.player,
                resources: party.resources,
            },
            Effect::AddResources {
                player: counterparty.player,
                resources: party.resources,
            },
            Effect::RemoveResources {
                player: counterparty.player,
                resources: counterparty.resources,
            },
        ])
    }

    pub fn buy_dev_card(&self, board: &Board, buy: &BuyDevCard) -> Result<Vec<Effect>, GameError> {
        let cost = costs::development_card();
        charge(board, buy.player, &cost)?;

        if self.rules.dev_card_requires_stock && !board.dev_card_stock().contains(&buy.card) {
            return Err(GameError::CardUnavailable(buy.card));
        }

        Ok(vec![
            Effect::AddDevCard {
                player: buy.player,
                card: buy.card,
            },
            Effect::RemoveResources {
                player: buy.player,
                resources: cost,
            },
        ])
    }

    pub fn build_road(&self, board: &Board, build: &BuildRoad) -> Result<Vec<Effect>, GameError> {
        let cost = costs::road();
        charge(board, build.player, &cost)?;

        if self.rules.validate_placement {
            board.check_road_placement(build.player, &build.road)?;
        }

        Ok(vec![
            Effect::AddRoad {
                player: build.player,
                road: build.road,
            },
            Effect::RemoveResources {
                player: build.player,
                resources: cost,
            },
        ])
    }

    pub fn build_settlement(
        &self,
        board: &Board,
        build: &BuildSettlement,
    ) -> Result<Vec<Effect>, GameError> {
        let cost = costs::settlement();
        charge(board, build.player, &cost)?;

        if self.rules.validate_placement {
            let placed =
                board.settlements_of(build.player).len() + board.cities_of(build.player).len();
            let require_road = placed as u32 >= self.rules.opening_settlements;
            board.check_settlement_placement(build.player, &build.settlement, require_road)?;
        }

        Ok(vec![
            Effect::AddSettlement {
                player: build.player,
                settlement: build.settlement,
            },
            Effect::RemoveResources {
                player: build.player,
                resources: cost,
            },
        ])
    }

    /// Build a city. The applier swaps out a settlement standing at the vertex.
    pub fn build_city(&self, board: &Board, build: &BuildCity) -> Result<Vec<Effect>, GameError> {
        let cost = costs::city();
        charge(board, build.player, &cost)?;

        if self.rules.city_requires_settlement
            && board.get_vertex(&build.city) != VertexBuilding::Settlement(build.player)
        {
            return Err(GameError::NoSettlementToUpgrade);
        }

        Ok(vec![
            Effect::AddCity {
                player: build.player,
                city: build.city,
            },
            Effect::RemoveResources {
                player: build.player,
                resources: cost,
            },
        ])
    }
}

fn count(structures: &[VertexCoord]) -> u32 {
    u32::try_from(structures.len()).unwrap_or(u32::MAX)
}

fn pay(player: PlayerId, resource: Resource, amount: u32) -> Effect {
    Effect::AddResources {
        player,
        resources: ResourceHand::single(resource, amount),
    }
}

/// The player exists and can cover `cost`
fn charge(board: &Board, player: PlayerId, cost: &ResourceHand) -> Result<(), GameError> {
    if !board.player(player)?.can_afford(cost) {
        return Err(GameError::InsufficientResources { player });
    }
    Ok(())
}
