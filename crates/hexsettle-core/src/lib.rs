//! Hexsettle - a rules engine for a hex-tile settlement game
//!
//! This crate provides the core game logic, including:
//! - Axial hex coordinates with canonical edges and vertices
//! - Board representation with tiles, players, buildings and roads
//! - The vocabulary of actions players declare and effects they produce
//! - A resolver that turns actions into effects without touching the board
//! - An atomic applier and a `Game` driver that records history
//!
//! # Architecture
//!
//! Resolution and application are split. `Resolver::resolve` reads a board and
//! returns effects; `Board::apply` commits them all or none. The only source
//! of randomness is the RNG handed in by the caller, so a seed and a list of
//! actions reproduce a game exactly.
//!
//! # Modules
//!
//! - [`hex`]: Coordinate system for hex tiles, vertices, and edges
//! - [`board`]: Tiles, players and building ownership
//! - [`player`]: Player state, resources and building costs
//! - [`actions`]: Actions and effects
//! - [`rules`]: Optional rule checks
//! - [`resolver`]: Action resolution
//! - [`game`]: Errors, effect application and the game driver

pub mod actions;
pub mod board;
pub mod game;
pub mod hex;
pub mod player;
pub mod resolver;
pub mod rules;

// Re-export commonly used types
pub use actions::{
    Action, BuildCity, BuildRoad, BuildSettlement, BuyDevCard, Effect, Offer, Rob, Roll, Trade,
};
pub use board::{
    find_adjacent_cities, find_adjacent_settlements, Board, BoardSnapshot, PlayerId, Resource,
    Tile, TileType, VertexBuilding,
};
pub use game::{Game, GameError};
pub use hex::{
    contains_neighbor, find_shared_neighbor, EdgeCoord, EdgeDirection, HexCoord, VertexCoord,
};
pub use player::{costs, DevCardHand, DevelopmentCard, Player, ResourceHand};
pub use resolver::Resolver;
pub use rules::{ParseRuleModeError, RuleMode, RuleSet};
