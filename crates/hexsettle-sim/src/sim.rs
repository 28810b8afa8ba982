//! A seeded self-play loop.
//!
//! Every player follows the same greedy policy: roll, rob on a seven, then
//! build the most valuable thing they can afford until nothing is left. All
//! randomness comes from one ChaCha8 stream seeded from the config, so a seed
//! fully determines the game.

use anyhow::{anyhow, Context};
use hexsettle_core::{
    costs, Action, Board, BuildCity, BuildRoad, BuildSettlement, BuyDevCard, Effect, Game,
    GameError, PlayerId, ResourceHand, Rob, Roll,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::config::SimConfig;

/// Per-player totals at the end of a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub settlements: usize,
    pub cities: usize,
    pub roads: usize,
    pub dev_cards: usize,
    pub resources: ResourceHand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub rounds: u32,
    pub effects: usize,
    /// Actions the resolver or applier refused
    pub rejected: u32,
    pub players: Vec<PlayerSummary>,
}

pub struct Simulation {
    game: Game<ChaCha8Rng>,
    turns: u32,
    rejected: u32,
}

impl Simulation {
    /// Lay out a standard board from the seed and seat the players
    pub fn new(config: &SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let board = Board::standard_with_rng(config.players, &mut rng);
        info!(
            seed = config.seed,
            players = config.players,
            rules = %config.rules,
            "board ready"
        );

        Self {
            game: Game::with_rng(board, config.rules.rules(), rng),
            turns: config.turns,
            rejected: 0,
        }
    }

    pub fn game(&self) -> &Game<ChaCha8Rng> {
        &self.game
    }

    /// Play the opening placements and every round
    pub fn run(&mut self) -> anyhow::Result<Summary> {
        self.opening()?;
        for round in 0..self.turns {
            info!(round, effects = self.game.history().len(), "round start");
            for player in self.player_ids() {
                self.play_turn(player)?;
            }
        }
        Ok(self.summary())
    }

    fn player_ids(&self) -> Vec<PlayerId> {
        self.game.board().players().iter().map(|p| p.id).collect()
    }

    /// Two settlements with a road each, in snake order.
    ///
    /// The bank grants each piece's cost just before it is bought.
    pub fn opening(&mut self) -> anyhow::Result<()> {
        let forward = self.player_ids();
        let order: Vec<PlayerId> = forward.iter().chain(forward.iter().rev()).copied().collect();

        for player in order {
            self.grant(player, costs::settlement())?;
            let spots = self.game.board().valid_settlement_spots(player, false);
            let settlement = *spots
                .choose(self.game.rng())
                .ok_or_else(|| anyhow!("no opening spot left for player {player}"))?;
            self.game
                .submit(&BuildSettlement { player, settlement }.into())
                .with_context(|| format!("opening settlement for player {player}"))?;

            self.grant(player, costs::road())?;
            let roads: Vec<_> = settlement
                .touching_edges()
                .into_iter()
                .filter(|edge| self.game.board().check_road_placement(player, edge).is_ok())
                .collect();
            let road = *roads
                .choose(self.game.rng())
                .ok_or_else(|| anyhow!("no opening road for player {player}"))?;
            self.game
                .submit(&BuildRoad { player, road }.into())
                .with_context(|| format!("opening road for player {player}"))?;

            debug!(player, ?settlement, ?road, "opening placement");
        }

        Ok(())
    }

    fn grant(&mut self, player: PlayerId, resources: ResourceHand) -> anyhow::Result<()> {
        self.game
            .apply(&[Effect::AddResources { player, resources }])
            .with_context(|| format!("bank grant to player {player}"))
    }

    fn play_turn(&mut self, player: PlayerId) -> anyhow::Result<()> {
        let rng = self.game.rng();
        let roll = Roll::new(rng.gen_range(1..=6), rng.gen_range(1..=6));
        let produced = self
            .game
            .submit(&roll.into())
            .context("rolling dice")?;
        debug!(player, total = roll.total(), produced = produced.len(), "rolled");

        if roll.total() == 7 {
            self.rob(player);
        }

        while let Some(action) = self.next_purchase(player) {
            if let Err(err) = self.game.submit(&action) {
                warn!(player, action = action.kind(), %err, "purchase refused");
                self.rejected += 1;
                break;
            }
            debug!(player, action = action.kind(), "bought");
        }

        Ok(())
    }

    fn rob(&mut self, robber: PlayerId) {
        let victims: Vec<PlayerId> = self
            .game
            .board()
            .players()
            .iter()
            .filter(|p| p.id != robber && !p.resources.is_empty())
            .map(|p| p.id)
            .collect();
        let Some(&victim) = victims.choose(self.game.rng()) else {
            return;
        };

        match self.game.submit(&Rob { robber, victim }.into()) {
            Ok(_) => debug!(robber, victim, "robbed"),
            Err(err) => {
                warn!(robber, victim, %err, "robbery refused");
                self.rejected += 1;
            }
        }
    }

    /// City, then settlement, then road, then development card
    fn next_purchase(&mut self, player: PlayerId) -> Option<Action> {
        let board = self.game.board();
        let hand = board.player(player).ok()?.resources;

        if hand.can_afford(&costs::city()) {
            if let Some(&city) = board.valid_city_spots(player).first() {
                return Some(BuildCity { player, city }.into());
            }
        }

        if hand.can_afford(&costs::settlement()) {
            if let Some(&settlement) = board.valid_settlement_spots(player, true).first() {
                return Some(BuildSettlement { player, settlement }.into());
            }
        }

        if hand.can_afford(&costs::road()) {
            let roads = board.valid_road_spots(player);
            if !roads.is_empty() {
                let road = roads[self.game.rng().gen_range(0..roads.len())];
                return Some(BuildRoad { player, road }.into());
            }
        }

        if hand.can_afford(&costs::development_card()) {
            if let Some(&card) = board.dev_card_stock().last() {
                return Some(BuyDevCard { player, card }.into());
            }
        }

        None
    }

    pub fn summary(&self) -> Summary {
        let board = self.game.board();
        let players: Vec<PlayerSummary> = board
            .players()
            .iter()
            .map(|p| PlayerSummary {
                id: p.id,
                settlements: board.settlements_of(p.id).len(),
                cities: board.cities_of(p.id).len(),
                roads: board.roads_of(p.id).len(),
                dev_cards: p.dev_cards.in_hand.len(),
                resources: p.resources,
            })
            .collect();

        for p in &players {
            info!(
                player = p.id,
                settlements = p.settlements,
                cities = p.cities,
                roads = p.roads,
                dev_cards = p.dev_cards,
                cards_in_hand = p.resources.total(),
                "final standing"
            );
        }

        Summary {
            rounds: self.turns,
            effects: self.game.history().len(),
            rejected: self.rejected,
            players,
        }
    }

    /// Replay the recorded history from the starting board of `config`
    pub fn verify_replay(&self, config: &SimConfig) -> Result<bool, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let initial = Board::standard_with_rng(config.players, &mut rng);
        let replayed = initial.replay(self.game.history())?;
        Ok(&replayed == self.game.board())
    }
}
