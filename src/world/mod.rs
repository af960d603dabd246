//! World module
//!
//! The fixed-size overworld: resource tiles, shrines, the buried chamber,
//! and deterministic generation.

pub mod generation;

pub use generation::generate;

use std::collections::HashSet;

use serde::Serialize;

use crate::ecs::Position;
use crate::minigames::MinigameVariant;

/// Side length of the square world grid
pub const WORLD_SIZE: i32 = 60;

/// A shrine tile; interacting with it launches the minigame for its variant
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Shrine {
    pub pos: Position,
    pub variant: MinigameVariant,
}

/// The buried objective tile
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Chamber {
    pub pos: Position,
    pub required_sigils: u32,
    pub unlocked: bool,
}

/// Tile-level world state.
///
/// `trees` and `rocks` are disjoint by construction (generation draws one
/// sample per tile). `dug` is independent of both.
#[derive(Debug, Clone)]
pub struct World {
    pub trees: HashSet<Position>,
    pub rocks: HashSet<Position>,
    pub dug: HashSet<Position>,
    pub shrines: Vec<Shrine>,
    pub chamber: Chamber,
}

impl World {
    /// Shrine occupying the given tile, if any
    pub fn shrine_at(&self, pos: Position) -> Option<&Shrine> {
        self.shrines.iter().find(|s| s.pos == pos)
    }

    /// True if the tile holds a tree or a rock
    pub fn is_obstructed(&self, pos: Position) -> bool {
        self.trees.contains(&pos) || self.rocks.contains(&pos)
    }
}
