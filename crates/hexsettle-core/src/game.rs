//! Effect application and the game driver.
//!
//! This module contains `GameError`, the atomic effect applier on `Board`, and
//! `Game`, which couples a board with a resolver and an RNG and keeps the
//! history of everything applied.

use crate::actions::{Action, Effect};
use crate::board::{Board, PlayerId, VertexBuilding};
use crate::player::DevelopmentCard;
use crate::resolver::Resolver;
use crate::rules::RuleSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur when resolving actions or applying effects
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),

    #[error("Player {player} cannot afford this")]
    InsufficientResources { player: PlayerId },

    #[error("Invalid roll: {a} and {b}")]
    InvalidRoll { a: u8, b: u8 },

    #[error("Player {0} has nothing to steal")]
    EmptyVictimHand(PlayerId),

    #[error("Invalid placement location")]
    InvalidLocation,

    #[error("Location already occupied")]
    Occupied,

    #[error("No settlement of yours to upgrade")]
    NoSettlementToUpgrade,

    #[error("No {0:?} left in the development card stock")]
    CardUnavailable(DevelopmentCard),

    #[error("Invalid trade")]
    InvalidTrade,

    #[error("Player {player} cannot hold that many resources")]
    ResourceOverflow { player: PlayerId },
}

impl Board {
    /// Apply a single effect in place. A failing effect changes nothing.
    pub fn apply_effect(&mut self, effect: &Effect) -> Result<(), GameError> {
        trace!(player = effect.player(), ?effect, "applying");

        match *effect {
            Effect::AddResources { player, resources } => {
                if !self.player_mut(player)?.resources.try_add_hand(&resources) {
                    return Err(GameError::ResourceOverflow { player });
                }
            }
            Effect::RemoveResources { player, resources } => {
                if !self.player_mut(player)?.resources.try_subtract(&resources) {
                    return Err(GameError::InsufficientResources { player });
                }
            }
            Effect::AddDevCard { player, card } => {
                self.player_mut(player)?.dev_cards.in_hand.push(card);
                self.take_from_stock(card);
            }
            Effect::AddRoad { player, road } => {
                self.player(player)?;
                if self.get_edge(&road).is_some() {
                    return Err(GameError::Occupied);
                }
                self.place_road(road, player);
            }
            Effect::AddSettlement { player, settlement } => {
                self.player(player)?;
                if self.get_vertex(&settlement) != VertexBuilding::Empty {
                    return Err(GameError::Occupied);
                }
                self.place_settlement(settlement, player);
            }
            Effect::AddCity { player, city } => {
                self.player(player)?;
                match self.get_vertex(&city) {
                    VertexBuilding::Empty => {}
                    VertexBuilding::Settlement(owner) if owner == player => {}
                    _ => return Err(GameError::Occupied),
                }
                self.place_city(city, player);
            }
        }

        Ok(())
    }

    /// Apply effects in order, all or nothing.
    ///
    /// If any effect fails the board is left exactly as it was.
    pub fn apply(&mut self, effects: &[Effect]) -> Result<(), GameError> {
        let mut next = self.clone();
        for (index, effect) in effects.iter().enumerate() {
            if let Err(err) = next.apply_effect(effect) {
                debug!(index, %err, "effect rejected, board unchanged");
                return Err(err);
            }
        }
        *self = next;
        debug!(effects = effects.len(), "applied");
        Ok(())
    }

    /// Rebuild a board by applying `history` to this one
    pub fn replay(mut self, history: &[Effect]) -> Result<Board, GameError> {
        self.apply(history)?;
        Ok(self)
    }
}

/// A board plus the machinery to drive it: rules, randomness and history
#[derive(Debug, Clone)]
pub struct Game<R> {
    board: Board,
    resolver: Resolver,
    rng: R,
    history: Vec<Effect>,
}

impl Game<ChaCha8Rng> {
    /// Create a game whose randomness is fully determined by `seed`
    pub fn seeded(board: Board, rules: RuleSet, seed: u64) -> Self {
        Self::with_rng(board, rules, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(board: Board, rules: RuleSet, rng: R) -> Self {
        Self {
            board,
            resolver: Resolver::new(rules),
            rng,
            history: Vec::new(),
        }
    }

    /// Resolve an action against the current board and apply the result.
    ///
    /// Returns the effects that were applied. A rejected action leaves the
    /// board and history untouched.
    pub fn submit(&mut self, action: &Action) -> Result<Vec<Effect>, GameError> {
        let effects = self.resolver.resolve(&self.board, action, &mut self.rng)?;
        self.apply(&effects)?;
        Ok(effects)
    }

    /// Apply effects that did not come from an action, such as bank grants
    pub fn apply(&mut self, effects: &[Effect]) -> Result<(), GameError> {
        self.board.apply(effects)?;
        self.history.extend_from_slice(effects);
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> &RuleSet {
        self.resolver.rules()
    }

    /// Mutable access to the RNG, for callers that draw dice or pick targets
    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Every effect applied so far, in order
    pub fn history(&self) -> &[Effect] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{BuildCity, Roll};
    use crate::board::{Resource, Tile};
    use crate::hex::{EdgeCoord, HexCoord};
    use crate::player::{Player, ResourceHand};

    fn hex(q: i32, r: i32) -> HexCoord {
        HexCoord::new(q, r)
    }

    fn two_player_board() -> Board {
        let mut board = Board::new(hex(0, 0));
        board.add_player(Player::new(1));
        board.add_player(Player::new(2));
        board
    }

    #[test]
    fn test_apply_resource_effects() {
        let mut board = two_player_board();
        let effects = [
            Effect::AddResources {
                player: 1,
                resources: ResourceHand::with_amounts(2, 0, 0, 1, 0),
            },
            Effect::RemoveResources {
                player: 1,
                resources: ResourceHand::single(Resource::Brick, 1),
            },
        ];

        board.apply(&effects).expect("effects apply");
        assert_eq!(
            board.player(1).map(|p| p.resources),
            Ok(ResourceHand::with_amounts(1, 0, 0, 1, 0))
        );
    }

    #[test]
    fn test_apply_is_atomic() {
        let mut board = two_player_board();
        let before = board.clone();
        let effects = [
            Effect::AddResources {
                player: 1,
                resources: ResourceHand::single(Resource::Ore, 5),
            },
            Effect::RemoveResources {
                player: 2,
                resources: ResourceHand::single(Resource::Ore, 1),
            },
        ];

        assert_eq!(
            board.apply(&effects),
            Err(GameError::InsufficientResources { player: 2 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_refuses_counter_overflow() {
        let mut board = two_player_board();
        board
            .apply(&[Effect::AddResources {
                player: 2,
                resources: ResourceHand::single(Resource::Grain, u32::MAX),
            }])
            .expect("fits exactly");
        let before = board.clone();

        let effects = [
            Effect::AddResources {
                player: 1,
                resources: ResourceHand::single(Resource::Grain, 1),
            },
            Effect::AddResources {
                player: 2,
                resources: ResourceHand::single(Resource::Grain, 1),
            },
        ];
        assert_eq!(
            board.apply(&effects),
            Err(GameError::ResourceOverflow { player: 2 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_unknown_player() {
        let mut board = two_player_board();
        let effect = Effect::AddResources {
            player: 9,
            resources: ResourceHand::single(Resource::Wool, 1),
        };
        assert_eq!(board.apply(&[effect]), Err(GameError::PlayerNotFound(9)));
    }

    #[test]
    fn test_apply_occupied_locations() {
        let mut board = two_player_board();
        let vertex = hex(0, 0).vertices()[0];
        let edge = EdgeCoord::new(hex(0, 0), hex(1, 0));

        board
            .apply(&[
                Effect::AddSettlement {
                    player: 1,
                    settlement: vertex,
                },
                Effect::AddRoad { player: 1, road: edge },
            ])
            .expect("free locations");

        assert_eq!(
            board.apply(&[Effect::AddRoad { player: 2, road: edge }]),
            Err(GameError::Occupied)
        );
        assert_eq!(
            board.apply(&[Effect::AddSettlement {
                player: 2,
                settlement: vertex
            }]),
            Err(GameError::Occupied)
        );
        assert_eq!(
            board.apply(&[Effect::AddCity {
                player: 2,
                city: vertex
            }]),
            Err(GameError::Occupied)
        );

        board
            .apply(&[Effect::AddCity {
                player: 1,
                city: vertex,
            }])
            .expect("own settlement upgrades");
        assert_eq!(board.get_vertex(&vertex), VertexBuilding::City(1));
    }

    #[test]
    fn test_apply_dev_card_draws_from_stock() {
        let mut board = two_player_board();
        board.set_dev_card_stock(vec![DevelopmentCard::Knight, DevelopmentCard::VictoryPoint]);

        board
            .apply(&[Effect::AddDevCard {
                player: 2,
                card: DevelopmentCard::VictoryPoint,
            }])
            .expect("player exists");

        assert_eq!(board.dev_card_stock(), &[DevelopmentCard::Knight]);
        assert_eq!(
            board.player(2).map(|p| p.dev_cards.in_hand.clone()),
            Ok(vec![DevelopmentCard::VictoryPoint])
        );
    }

    #[test]
    fn test_game_submit_and_replay() {
        let mut board = two_player_board();
        board.add_tile(Tile::new_resource(hex(0, 0), Resource::Ore, 6));
        let vertex = hex(0, 0).vertices()[1];
        board.place_settlement(vertex, 1);
        let initial = board.clone();

        let mut game = Game::seeded(board, RuleSet::permissive(), 7);
        game.apply(&[Effect::AddResources {
            player: 1,
            resources: ResourceHand::single(Resource::Grain, 2),
        }])
        .expect("grant applies");

        // One ore so far
        game.submit(&Roll::new(3, 3).into()).expect("valid roll");
        let city: Action = BuildCity { player: 1, city: vertex }.into();
        assert_eq!(
            game.submit(&city),
            Err(GameError::InsufficientResources { player: 1 })
        );

        game.submit(&Roll::new(2, 4).into()).expect("valid roll");
        game.submit(&Roll::new(1, 5).into()).expect("valid roll");
        game.submit(&city).expect("can afford a city now");

        assert_eq!(game.board().cities_of(1), vec![vertex]);
        assert_eq!(
            game.board().player(1).map(|p| p.resources),
            Ok(ResourceHand::new())
        );

        let replayed = initial.replay(game.history()).expect("replays");
        assert_eq!(&replayed, game.board());
    }

    #[test]
    fn test_rejected_action_keeps_history() {
        let mut game = Game::seeded(two_player_board(), RuleSet::strict(), 1);
        assert_eq!(
            game.submit(&Roll::new(7, 1).into()),
            Err(GameError::InvalidRoll { a: 7, b: 1 })
        );
        assert!(game.history().is_empty());
    }
}
