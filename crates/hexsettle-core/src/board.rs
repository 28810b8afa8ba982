//! Game board representation including tiles, players and buildings.
//!
//! This module contains:
//! - Resource types
//! - Tile types and the board grid
//! - Building ownership (settlements, cities, roads)
//! - Board validation and query methods

use crate::game::GameError;
use crate::hex::{EdgeCoord, HexCoord, VertexCoord};
use crate::player::{DevelopmentCard, Player};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Player identifier, unique within a board
pub type PlayerId = u8;

/// Resource types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    Brick,
    Grain,
    Lumber,
    Ore,
    Wool,
}

impl Resource {
    /// All resource types
    pub const ALL: [Resource; 5] = [
        Resource::Brick,
        Resource::Grain,
        Resource::Lumber,
        Resource::Ore,
        Resource::Wool,
    ];
}

/// Type of hex tile on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileType {
    /// Produces a resource when its number is rolled
    Resource(Resource),
    /// Desert - no production
    Desert,
    /// Sea - surrounds the playable area
    Sea,
}

/// A single hex tile on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Position on the hex grid
    pub coord: HexCoord,
    /// What type of tile (resource, desert, sea)
    pub tile_type: TileType,
    /// Dice number that triggers production (2-12, None for desert/sea)
    pub dice_number: Option<u8>,
}

impl Tile {
    /// Create a new resource tile
    pub fn new_resource(coord: HexCoord, resource: Resource, dice_number: u8) -> Self {
        Self {
            coord,
            tile_type: TileType::Resource(resource),
            dice_number: Some(dice_number),
        }
    }

    /// Create a desert tile
    pub fn desert(coord: HexCoord) -> Self {
        Self {
            coord,
            tile_type: TileType::Desert,
            dice_number: None,
        }
    }

    /// Create a sea tile
    pub fn sea(coord: HexCoord) -> Self {
        Self {
            coord,
            tile_type: TileType::Sea,
            dice_number: None,
        }
    }

    /// Get the resource this tile produces, if any
    pub fn resource(&self) -> Option<Resource> {
        match self.tile_type {
            TileType::Resource(r) => Some(r),
            _ => None,
        }
    }

    /// Land is anything that isn't sea
    pub fn is_land(&self) -> bool {
        !matches!(self.tile_type, TileType::Sea)
    }
}

/// What's built on a vertex (corner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum VertexBuilding {
    /// Nothing built
    #[default]
    Empty,
    /// Settlement (1 resource per adjacent tile)
    Settlement(PlayerId),
    /// City (2 resources per adjacent tile)
    City(PlayerId),
}

impl VertexBuilding {
    /// Get the owner of this building, if any
    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            VertexBuilding::Empty => None,
            VertexBuilding::Settlement(p) | VertexBuilding::City(p) => Some(*p),
        }
    }

    /// Resource multiplier (how many resources per production)
    pub fn resource_multiplier(&self) -> u32 {
        match self {
            VertexBuilding::Empty => 0,
            VertexBuilding::Settlement(_) => 1,
            VertexBuilding::City(_) => 2,
        }
    }
}

/// Structures of `structures` whose vertex touches `location`, in input order.
pub fn find_adjacent_cities(location: HexCoord, structures: &[VertexCoord]) -> Vec<VertexCoord> {
    touching(location, structures)
}

/// Structures of `structures` whose vertex touches `location`, in input order.
pub fn find_adjacent_settlements(
    location: HexCoord,
    structures: &[VertexCoord],
) -> Vec<VertexCoord> {
    touching(location, structures)
}

fn touching(location: HexCoord, structures: &[VertexCoord]) -> Vec<VertexCoord> {
    structures
        .iter()
        .copied()
        .filter(|v| v.touches(&location))
        .collect()
}

/// Land hexes of the standard layout: center, ring 1, ring 2
const STANDARD_LAND: [(i32, i32); 19] = [
    (0, 0),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (2, 0),
    (2, -1),
    (2, -2),
    (1, -2),
    (0, -2),
    (-1, -1),
    (-2, 0),
    (-2, 1),
    (-2, 2),
    (-1, 2),
    (0, 2),
    (1, 1),
];

/// Standard number tokens (one of 2 and 12, two of 3-6 and 8-11)
const STANDARD_NUMBERS: [u8; 18] = [2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12];

/// The complete game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Tiles in placement order
    tiles: Vec<Tile>,
    /// Players in seating order
    players: Vec<Player>,
    /// Buildings on vertices
    vertices: BTreeMap<VertexCoord, VertexBuilding>,
    /// Roads on edges, with their owner
    edges: BTreeMap<EdgeCoord, PlayerId>,
    /// Current robber location
    robber: HexCoord,
    /// Development cards left to draw
    dev_card_stock: Vec<DevelopmentCard>,
}

impl Board {
    /// Create an empty board with the robber at `robber`
    pub fn new(robber: HexCoord) -> Self {
        Self {
            tiles: Vec::new(),
            players: Vec::new(),
            vertices: BTreeMap::new(),
            edges: BTreeMap::new(),
            robber,
            dev_card_stock: Vec::new(),
        }
    }

    /// Create the standard layout with randomized tiles and numbers.
    ///
    /// Players get ids `0..player_count`.
    pub fn standard_with_rng<R: Rng + ?Sized>(player_count: u8, rng: &mut R) -> Self {
        let land: Vec<HexCoord> = STANDARD_LAND
            .iter()
            .map(|&(q, r)| HexCoord::new(q, r))
            .collect();

        // 4 Lumber, 4 Grain, 4 Wool, 3 Ore, 3 Brick, 1 Desert (None)
        let mut terrain: Vec<Option<Resource>> = Vec::with_capacity(land.len());
        for (resource, count) in [
            (Resource::Lumber, 4),
            (Resource::Grain, 4),
            (Resource::Wool, 4),
            (Resource::Ore, 3),
            (Resource::Brick, 3),
        ] {
            terrain.extend(std::iter::repeat(Some(resource)).take(count));
        }
        terrain.push(None);
        terrain.shuffle(rng);

        let producing: Vec<HexCoord> = land
            .iter()
            .zip(&terrain)
            .filter(|(_, kind)| kind.is_some())
            .map(|(coord, _)| *coord)
            .collect();
        let numbered: BTreeMap<HexCoord, u8> = producing
            .iter()
            .copied()
            .zip(Self::assign_numbers_avoiding_adjacent_68(&producing, rng))
            .collect();

        let mut board = Self::new(HexCoord::default());
        for (coord, kind) in land.iter().zip(terrain) {
            match (kind, numbered.get(coord)) {
                (Some(resource), Some(&number)) => {
                    board.add_tile(Tile::new_resource(*coord, resource, number));
                }
                _ => {
                    board.add_tile(Tile::desert(*coord));
                    board.robber = *coord;
                }
            }
        }

        // Sea ring around the land
        let land_set: BTreeSet<HexCoord> = land.iter().copied().collect();
        let sea: BTreeSet<HexCoord> = land
            .iter()
            .flat_map(|coord| coord.neighbors())
            .filter(|coord| !land_set.contains(coord))
            .collect();
        for coord in sea {
            board.add_tile(Tile::sea(coord));
        }

        for id in 0..player_count {
            board.add_player(Player::new(id));
        }

        let mut stock = DevelopmentCard::standard_deck();
        DevelopmentCard::shuffle_deck(&mut stock, rng);
        board.dev_card_stock = stock;

        board
    }

    /// Shuffle number tokens until no 6 and 8 sit next to each other
    fn assign_numbers_avoiding_adjacent_68<R: Rng + ?Sized>(
        coords: &[HexCoord],
        rng: &mut R,
    ) -> Vec<u8> {
        const MAX_ATTEMPTS: usize = 100;

        let mut numbers = STANDARD_NUMBERS.to_vec();
        for _ in 0..MAX_ATTEMPTS {
            numbers.shuffle(rng);
            if Self::is_valid_number_placement(coords, &numbers) {
                break;
            }
        }
        numbers
    }

    fn is_valid_number_placement(coords: &[HexCoord], numbers: &[u8]) -> bool {
        let hot: Vec<HexCoord> = coords
            .iter()
            .zip(numbers)
            .filter(|(_, n)| matches!(**n, 6 | 8))
            .map(|(c, _)| *c)
            .collect();

        hot.iter()
            .all(|a| hot.iter().all(|b| !a.is_neighbor(b)))
    }

    // ==================== Setup ====================

    /// Place a tile
    pub fn add_tile(&mut self, tile: Tile) {
        self.tiles.push(tile);
    }

    /// Seat a player
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Replace the development card draw stock
    pub fn set_dev_card_stock(&mut self, stock: Vec<DevelopmentCard>) {
        self.dev_card_stock = stock;
    }

    // ==================== Query Methods ====================

    /// Linear scan for a player
    pub fn find_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Like `find_player`, with absence as an error
    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.find_player(id).ok_or(GameError::PlayerNotFound(id))
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(GameError::PlayerNotFound(id))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Get the robber's current location
    pub fn robber(&self) -> HexCoord {
        self.robber
    }

    pub fn dev_card_stock(&self) -> &[DevelopmentCard] {
        &self.dev_card_stock
    }

    /// Get a tile by coordinate
    pub fn get_tile(&self, coord: &HexCoord) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.coord == *coord)
    }

    /// Get building at a vertex
    pub fn get_vertex(&self, coord: &VertexCoord) -> VertexBuilding {
        self.vertices.get(coord).copied().unwrap_or_default()
    }

    /// Get the owner of the road at an edge
    pub fn get_edge(&self, coord: &EdgeCoord) -> Option<PlayerId> {
        self.edges.get(coord).copied()
    }

    /// A player's settlements, in location order
    pub fn settlements_of(&self, player: PlayerId) -> Vec<VertexCoord> {
        self.vertices_where(|b| b == VertexBuilding::Settlement(player))
    }

    /// A player's cities, in location order
    pub fn cities_of(&self, player: PlayerId) -> Vec<VertexCoord> {
        self.vertices_where(|b| b == VertexBuilding::City(player))
    }

    /// A player's roads, in location order
    pub fn roads_of(&self, player: PlayerId) -> Vec<EdgeCoord> {
        self.edges
            .iter()
            .filter(|(_, owner)| **owner == player)
            .map(|(edge, _)| *edge)
            .collect()
    }

    fn vertices_where(&self, keep: impl Fn(VertexBuilding) -> bool) -> Vec<VertexCoord> {
        self.vertices
            .iter()
            .filter(|(_, building)| keep(**building))
            .map(|(coord, _)| *coord)
            .collect()
    }

    /// Check if a hex holds a land tile
    pub fn is_land_hex(&self, hex: &HexCoord) -> bool {
        self.get_tile(hex).is_some_and(Tile::is_land)
    }

    /// Check if a vertex is on land
    pub fn is_land_vertex(&self, vertex: &VertexCoord) -> bool {
        vertex.touching_hexes().iter().any(|h| self.is_land_hex(h))
    }

    /// Check if an edge is on land
    pub fn is_land_edge(&self, edge: &EdgeCoord) -> bool {
        edge.touching_hexes().iter().any(|h| self.is_land_hex(h))
    }

    /// Get all vertices that are on land (adjacent to at least one land tile)
    pub fn land_vertices(&self) -> BTreeSet<VertexCoord> {
        self.tiles
            .iter()
            .filter(|t| t.is_land())
            .flat_map(|t| t.coord.vertices())
            .collect()
    }

    /// Get all edges that are on land
    pub fn land_edges(&self) -> BTreeSet<EdgeCoord> {
        self.tiles
            .iter()
            .filter(|t| t.is_land())
            .flat_map(|t| t.coord.edges())
            .collect()
    }

    // ==================== Validation Methods ====================

    /// Check if a vertex satisfies the distance rule (no adjacent buildings)
    pub fn satisfies_distance_rule(&self, vertex: &VertexCoord) -> bool {
        vertex
            .adjacent_vertices()
            .iter()
            .all(|adj| self.get_vertex(adj).owner().is_none())
    }

    /// Check if a vertex is connected to a player's road network
    pub fn is_connected_to_road(&self, vertex: &VertexCoord, player: PlayerId) -> bool {
        vertex
            .touching_edges()
            .iter()
            .any(|edge| self.get_edge(edge) == Some(player))
    }

    /// Check if an edge connects to a player's network.
    ///
    /// An endpoint counts if the player builds there, or if it is unbuilt and
    /// another of the player's roads leads to it.
    pub fn is_connected_to_network(&self, edge: &EdgeCoord, player: PlayerId) -> bool {
        let Some(endpoints) = edge.endpoints() else {
            return false;
        };

        endpoints.iter().any(|endpoint| match self.get_vertex(endpoint).owner() {
            Some(owner) => owner == player,
            None => endpoint
                .touching_edges()
                .iter()
                .any(|adj| adj != edge && self.get_edge(adj) == Some(player)),
        })
    }

    /// Check a settlement placement.
    ///
    /// `require_road` demands a connecting road of the player's.
    pub fn check_settlement_placement(
        &self,
        player: PlayerId,
        vertex: &VertexCoord,
        require_road: bool,
    ) -> Result<(), GameError> {
        if !vertex.is_valid() || !self.is_land_vertex(vertex) {
            return Err(GameError::InvalidLocation);
        }
        if self.get_vertex(vertex) != VertexBuilding::Empty {
            return Err(GameError::Occupied);
        }
        if !self.satisfies_distance_rule(vertex) {
            return Err(GameError::InvalidLocation);
        }
        if require_road && !self.is_connected_to_road(vertex, player) {
            return Err(GameError::InvalidLocation);
        }
        Ok(())
    }

    /// Check a road placement
    pub fn check_road_placement(&self, player: PlayerId, edge: &EdgeCoord) -> Result<(), GameError> {
        if !edge.is_valid() || !self.is_land_edge(edge) {
            return Err(GameError::InvalidLocation);
        }
        if self.get_edge(edge).is_some() {
            return Err(GameError::Occupied);
        }
        if !self.is_connected_to_network(edge, player) {
            return Err(GameError::InvalidLocation);
        }
        Ok(())
    }

    /// Get valid settlement spots for a player
    pub fn valid_settlement_spots(&self, player: PlayerId, require_road: bool) -> Vec<VertexCoord> {
        self.land_vertices()
            .into_iter()
            .filter(|v| self.check_settlement_placement(player, v, require_road).is_ok())
            .collect()
    }

    /// Get valid road spots for a player
    pub fn valid_road_spots(&self, player: PlayerId) -> Vec<EdgeCoord> {
        self.land_edges()
            .into_iter()
            .filter(|e| self.check_road_placement(player, e).is_ok())
            .collect()
    }

    /// Get valid city upgrade spots for a player
    pub fn valid_city_spots(&self, player: PlayerId) -> Vec<VertexCoord> {
        self.settlements_of(player)
    }

    // ==================== Mutation Methods ====================

    /// Place a settlement (assumes validation already done)
    pub fn place_settlement(&mut self, vertex: VertexCoord, player: PlayerId) {
        self.vertices.insert(vertex, VertexBuilding::Settlement(player));
    }

    /// Place a city, replacing whatever stood at the vertex
    pub fn place_city(&mut self, vertex: VertexCoord, player: PlayerId) {
        self.vertices.insert(vertex, VertexBuilding::City(player));
    }

    /// Place a road
    pub fn place_road(&mut self, edge: EdgeCoord, player: PlayerId) {
        self.edges.insert(edge, player);
    }

    /// Remove one card of this kind from the draw stock, if there is one
    pub(crate) fn take_from_stock(&mut self, card: DevelopmentCard) -> bool {
        match self.dev_card_stock.iter().rposition(|c| *c == card) {
            Some(pos) => {
                self.dev_card_stock.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Convert to a JSON-friendly representation with arrays instead of maps
    /// This is needed because JSON doesn't support complex types as keys
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            robber: self.robber,
            tiles: self.tiles.clone(),
            players: self.players.clone(),
            buildings: self
                .vertices
                .iter()
                .filter(|(_, building)| **building != VertexBuilding::Empty)
                .map(|(vertex, building)| BuildingSnapshot {
                    vertex: *vertex,
                    building: *building,
                })
                .collect(),
            roads: self
                .edges
                .iter()
                .map(|(edge, owner)| RoadSnapshot {
                    edge: *edge,
                    owner: *owner,
                })
                .collect(),
            dev_card_stock: self.dev_card_stock.len(),
        }
    }
}

/// JSON-friendly board representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub robber: HexCoord,
    pub tiles: Vec<Tile>,
    pub players: Vec<Player>,
    pub buildings: Vec<BuildingSnapshot>,
    pub roads: Vec<RoadSnapshot>,
    /// Cards left in the stock (contents stay hidden)
    pub dev_card_stock: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingSnapshot {
    pub vertex: VertexCoord,
    pub building: VertexBuilding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadSnapshot {
    pub edge: EdgeCoord,
    pub owner: PlayerId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn hex(q: i32, r: i32) -> HexCoord {
        HexCoord::new(q, r)
    }

    fn standard(seed: u64) -> Board {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Board::standard_with_rng(3, &mut rng)
    }

    #[test]
    fn test_find_adjacent_preserves_order() {
        let near_a = VertexCoord::new(hex(0, 0), hex(1, 0), hex(1, -1));
        let far = VertexCoord::new(hex(0, 2), hex(0, 3), hex(1, 2));
        let near_b = VertexCoord::new(hex(0, 0), hex(0, 1), hex(-1, 1));

        let structures = [near_a, far, near_b];
        assert_eq!(find_adjacent_cities(hex(0, 0), &structures), vec![near_a, near_b]);
        assert_eq!(find_adjacent_settlements(hex(0, 0), &structures), vec![near_a, near_b]);
        assert!(find_adjacent_settlements(hex(5, 5), &structures).is_empty());
    }

    #[test]
    fn test_find_player() {
        let mut board = Board::new(hex(0, 0));
        board.add_player(Player::new(4));
        board.add_player(Player::new(7));

        assert_eq!(board.find_player(7).map(|p| p.id), Some(7));
        assert!(board.find_player(1).is_none());
        assert_eq!(board.player(1), Err(GameError::PlayerNotFound(1)));
    }

    #[test]
    fn test_city_replaces_settlement() {
        let mut board = Board::new(hex(0, 0));
        let vertex = hex(0, 0).vertices()[0];

        board.place_settlement(vertex, 1);
        assert_eq!(board.settlements_of(1), vec![vertex]);

        board.place_city(vertex, 1);
        assert!(board.settlements_of(1).is_empty());
        assert_eq!(board.cities_of(1), vec![vertex]);
        assert_eq!(board.get_vertex(&vertex).resource_multiplier(), 2);
    }

    #[test]
    fn test_standard_board_has_19_land_tiles() {
        let board = standard(1);
        let land = board.tiles().iter().filter(|t| t.is_land()).count();
        assert_eq!(land, 19);
    }

    #[test]
    fn test_robber_starts_on_desert() {
        let board = standard(2);
        let deserts: Vec<&Tile> = board
            .tiles()
            .iter()
            .filter(|t| matches!(t.tile_type, TileType::Desert))
            .collect();

        assert_eq!(deserts.len(), 1);
        assert_eq!(deserts[0].coord, board.robber());
        assert_eq!(deserts[0].dice_number, None);
    }

    #[test]
    fn test_standard_board_resource_counts() {
        let board = standard(3);
        let count = |resource| {
            board
                .tiles()
                .iter()
                .filter(|t| t.resource() == Some(resource))
                .count()
        };

        assert_eq!(count(Resource::Lumber), 4);
        assert_eq!(count(Resource::Grain), 4);
        assert_eq!(count(Resource::Wool), 4);
        assert_eq!(count(Resource::Ore), 3);
        assert_eq!(count(Resource::Brick), 3);
    }

    #[test]
    fn test_standard_board_numbers() {
        let board = standard(4);
        let mut numbers: Vec<u8> = board.tiles().iter().filter_map(|t| t.dice_number).collect();
        numbers.sort();
        assert_eq!(numbers, STANDARD_NUMBERS.to_vec());
        assert!(!numbers.contains(&7));
    }

    #[test]
    fn test_no_adjacent_6_and_8() {
        for seed in 0..20 {
            let board = standard(seed);
            let hot: Vec<HexCoord> = board
                .tiles()
                .iter()
                .filter(|t| matches!(t.dice_number, Some(6) | Some(8)))
                .map(|t| t.coord)
                .collect();

            for a in &hot {
                for b in &hot {
                    assert!(!a.is_neighbor(b), "seed {seed}: 6/8 adjacent at {a:?} {b:?}");
                }
            }
        }
    }

    #[test]
    fn test_standard_board_is_deterministic_per_seed() {
        assert_eq!(standard(9), standard(9));
        assert_eq!(standard(9).players().len(), 3);
        assert_eq!(standard(9).dev_card_stock().len(), 25);
    }

    #[test]
    fn test_sea_surrounds_land() {
        let board = standard(5);
        let sea = board
            .tiles()
            .iter()
            .filter(|t| matches!(t.tile_type, TileType::Sea))
            .count();
        assert_eq!(sea, 18);
    }

    #[test]
    fn test_distance_rule() {
        let mut board = standard(6);
        let vertex = hex(0, 0).vertices()[0];

        assert!(board.satisfies_distance_rule(&vertex));

        board.place_settlement(vertex, 0);

        for adj in vertex.adjacent_vertices() {
            assert!(
                !board.satisfies_distance_rule(&adj),
                "Adjacent vertex should fail distance rule"
            );
        }
    }

    #[test]
    fn test_road_connectivity() {
        let mut board = standard(7);
        let vertex = hex(0, 0).vertices()[0];
        let edges = vertex.touching_edges();

        board.place_settlement(vertex, 0);

        // Player should be able to build roads from their settlement
        let valid_roads = board.valid_road_spots(0);
        for edge in &edges {
            assert!(valid_roads.contains(edge));
        }
        // But nobody else can
        assert!(board.valid_road_spots(1).is_empty());

        board.place_road(edges[0], 0);

        let extended = board.valid_road_spots(0);
        assert!(!extended.contains(&edges[0]));
        assert!(extended.len() > valid_roads.len() - 1);
    }

    #[test]
    fn test_enemy_settlement_blocks_road_network() {
        let mut board = standard(8);
        let edge = EdgeCoord::new(hex(0, 0), hex(1, 0));
        board.place_road(edge, 0);

        let [left, right] = edge.endpoints().expect("valid edge");
        board.place_settlement(left, 1);

        // Continuing through `left` is blocked, through `right` is fine
        let through_left = left
            .touching_edges()
            .into_iter()
            .find(|e| *e != edge)
            .expect("vertex has three edges");
        let through_right = right
            .touching_edges()
            .into_iter()
            .find(|e| *e != edge)
            .expect("vertex has three edges");

        assert!(!board.is_connected_to_network(&through_left, 0));
        assert!(board.is_connected_to_network(&through_right, 0));
    }

    #[test]
    fn test_settlement_placement_checks() {
        let mut board = standard(10);
        let vertex = hex(0, 0).vertices()[2];

        assert_eq!(board.check_settlement_placement(0, &vertex, false), Ok(()));
        assert_eq!(
            board.check_settlement_placement(0, &vertex, true),
            Err(GameError::InvalidLocation)
        );

        let bogus = VertexCoord::new(hex(0, 0), hex(1, 0), hex(2, 0));
        assert_eq!(
            board.check_settlement_placement(0, &bogus, false),
            Err(GameError::InvalidLocation)
        );

        board.place_settlement(vertex, 1);
        assert_eq!(
            board.check_settlement_placement(0, &vertex, false),
            Err(GameError::Occupied)
        );
    }

    #[test]
    fn test_take_from_stock() {
        let mut board = Board::new(hex(0, 0));
        board.set_dev_card_stock(vec![DevelopmentCard::Knight, DevelopmentCard::Monopoly]);

        assert!(board.take_from_stock(DevelopmentCard::Knight));
        assert!(!board.take_from_stock(DevelopmentCard::Knight));
        assert_eq!(board.dev_card_stock(), &[DevelopmentCard::Monopoly]);
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut board = standard(11);
        let vertex = hex(0, 0).vertices()[0];
        board.place_settlement(vertex, 0);
        board.place_road(vertex.touching_edges()[0], 0);

        let snapshot = board.snapshot();
        assert_eq!(snapshot.buildings.len(), 1);
        assert_eq!(snapshot.roads.len(), 1);

        let json = serde_json::to_string(&snapshot).expect("snapshot is JSON-friendly");
        assert!(json.contains("Settlement"));
    }
}
