//! Hex coordinate system using axial coordinates (q, r).
//!
//! This module provides the foundational coordinate types for the hex-based game board:
//! - `HexCoord`: Identifies individual hex tiles
//! - `EdgeCoord`: Identifies edges (two neighbouring hexes) where roads are placed
//! - `VertexCoord`: Identifies vertices (three mutually neighbouring hexes) where
//!   settlements and cities are placed
//!
//! Edges and vertices are described by the hexes that meet there rather than by a
//! hex plus a direction. Their hexes are kept sorted so the same location always
//! compares equal no matter which order the hexes were supplied in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Direction of a neighbouring hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdgeDirection {
    /// East edge (right)
    East,
    /// Northeast edge (top-right)
    NorthEast,
    /// Northwest edge (top-left)
    NorthWest,
    /// West edge (left)
    West,
    /// Southwest edge (bottom-left)
    SouthWest,
    /// Southeast edge (bottom-right)
    SouthEast,
}

impl EdgeDirection {
    /// All directions, counter-clockwise starting from East.
    ///
    /// Consecutive directions (wrapping around) point at hexes that are
    /// themselves neighbours, which is what `HexCoord::vertices` relies on.
    pub const ALL: [EdgeDirection; 6] = [
        EdgeDirection::East,
        EdgeDirection::NorthEast,
        EdgeDirection::NorthWest,
        EdgeDirection::West,
        EdgeDirection::SouthWest,
        EdgeDirection::SouthEast,
    ];

    /// Axial offset `(dq, dr)` of the neighbour in this direction
    pub const fn offset(self) -> (i32, i32) {
        match self {
            EdgeDirection::East => (1, 0),
            EdgeDirection::NorthEast => (1, -1),
            EdgeDirection::NorthWest => (0, -1),
            EdgeDirection::West => (-1, 0),
            EdgeDirection::SouthWest => (-1, 1),
            EdgeDirection::SouthEast => (0, 1),
        }
    }
}

/// Axial coordinate for hex grid.
///
/// In axial coordinates:
/// - `q` is the column and increases going east (right)
/// - `r` is the row and increases going southeast
/// - The third coordinate `s` (not stored) satisfies: q + r + s = 0
///
/// Nothing bounds a coordinate; the board decides which hexes are in play.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct HexCoord {
    /// Column (increases going east)
    pub q: i32,
    /// Row (increases going southeast)
    pub r: i32,
}

impl HexCoord {
    /// Create a new hex coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit third coordinate (s = -q - r)
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// The six neighboring hexes in `EdgeDirection::ALL` order
    pub fn neighbors(&self) -> [HexCoord; 6] {
        EdgeDirection::ALL.map(|dir| self.neighbor(dir))
    }

    /// Get the neighbor in a specific direction
    pub fn neighbor(&self, direction: EdgeDirection) -> HexCoord {
        let (dq, dr) = direction.offset();
        HexCoord::new(self.q + dq, self.r + dr)
    }

    /// True if `other` is one of the six hexes sharing an edge with this one.
    ///
    /// A hex is never its own neighbour.
    pub fn is_neighbor(&self, other: &HexCoord) -> bool {
        let delta = (self.q - other.q, self.r - other.r);
        EdgeDirection::ALL.iter().any(|dir| dir.offset() == delta)
    }

    /// Distance to another hex (in hex steps)
    pub fn distance_to(&self, other: &HexCoord) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s() - other.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Get all six vertices of this hex
    pub fn vertices(&self) -> [VertexCoord; 6] {
        let neighbors = self.neighbors();
        std::array::from_fn(|i| VertexCoord::new(*self, neighbors[i], neighbors[(i + 1) % 6]))
    }

    /// Get all six edges of this hex
    pub fn edges(&self) -> [EdgeCoord; 6] {
        self.neighbors().map(|neighbor| EdgeCoord::new(*self, neighbor))
    }
}

/// True if any of `candidates` is a neighbour of `hex`.
pub fn contains_neighbor(hex: HexCoord, candidates: &[HexCoord]) -> bool {
    candidates.iter().any(|candidate| hex.is_neighbor(candidate))
}

/// Returns the first candidate that neighbours both `a` and `b`.
///
/// Two neighbouring hexes share exactly two neighbours, so this is how the third
/// hex of a vertex is found. Candidates are searched in the order given.
pub fn find_shared_neighbor(a: HexCoord, b: HexCoord, candidates: &[HexCoord]) -> Option<HexCoord> {
    candidates
        .iter()
        .copied()
        .find(|candidate| a.is_neighbor(candidate) && b.is_neighbor(candidate))
}

/// Edge coordinate - the boundary between two hexes, where roads are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeCoord {
    a: HexCoord,
    b: HexCoord,
}

impl EdgeCoord {
    /// Create a new edge coordinate (automatically canonicalized)
    pub fn new(a: HexCoord, b: HexCoord) -> Self {
        if a <= b {
            Self { a, b }
        } else {
            Self { a: b, b: a }
        }
    }

    /// Get the 2 hexes that share this edge
    pub fn touching_hexes(&self) -> [HexCoord; 2] {
        [self.a, self.b]
    }

    /// An edge only exists between two neighbouring hexes
    pub fn is_valid(&self) -> bool {
        self.a.is_neighbor(&self.b)
    }

    /// Get the 2 vertices at the endpoints of this edge.
    ///
    /// Returns `None` when the two hexes are not neighbours.
    pub fn endpoints(&self) -> Option<[VertexCoord; 2]> {
        if !self.is_valid() {
            return None;
        }

        let mut shared = self
            .a
            .neighbors()
            .into_iter()
            .filter(|h| h.is_neighbor(&self.b));
        let first = shared.next()?;
        let second = shared.next()?;

        Some([
            VertexCoord::new(self.a, self.b, first),
            VertexCoord::new(self.a, self.b, second),
        ])
    }

    /// Get edges that share a vertex with this edge (for road connectivity)
    pub fn adjacent_edges(&self) -> Vec<EdgeCoord> {
        let mut adjacent = BTreeSet::new();
        for vertex in self.endpoints().into_iter().flatten() {
            for edge in vertex.touching_edges() {
                if edge != *self {
                    adjacent.insert(edge);
                }
            }
        }
        adjacent.into_iter().collect()
    }
}

/// Vertex coordinate - the corner where 3 hexes meet.
///
/// Vertices are where settlements and cities are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexCoord {
    hexes: [HexCoord; 3],
}

impl VertexCoord {
    /// Create a new vertex coordinate (automatically canonicalized)
    pub fn new(a: HexCoord, b: HexCoord, c: HexCoord) -> Self {
        let mut hexes = [a, b, c];
        hexes.sort();
        Self { hexes }
    }

    /// Get the 3 hexes that touch this vertex
    pub fn touching_hexes(&self) -> [HexCoord; 3] {
        self.hexes
    }

    /// True if `hex` is one of the three hexes meeting here
    pub fn touches(&self, hex: &HexCoord) -> bool {
        self.hexes.contains(hex)
    }

    /// A vertex only exists where three hexes are pairwise neighbours
    pub fn is_valid(&self) -> bool {
        let [a, b, c] = &self.hexes;
        a.is_neighbor(b) && b.is_neighbor(c) && a.is_neighbor(c)
    }

    /// Get the 3 edges that connect to this vertex
    pub fn touching_edges(&self) -> [EdgeCoord; 3] {
        let [a, b, c] = self.hexes;
        [EdgeCoord::new(a, b), EdgeCoord::new(b, c), EdgeCoord::new(a, c)]
    }

    /// Get the adjacent vertices (for distance rule checking)
    ///
    /// Adjacent vertices are those connected by exactly one edge. A valid vertex
    /// has three; an invalid one has none.
    pub fn adjacent_vertices(&self) -> Vec<VertexCoord> {
        if !self.is_valid() {
            return Vec::new();
        }

        self.touching_edges()
            .iter()
            .filter_map(|edge| edge.endpoints())
            .filter_map(|[first, second]| {
                if first == *self {
                    Some(second)
                } else if second == *self {
                    Some(first)
                } else {
                    None
                }
            })
            .collect()
    }
}
