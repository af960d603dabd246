//! Hearthbound - a cooperative two-player survival puzzle simulation
//!
//! Gather resources, win the three shrine minigames, unlock the buried
//! chamber, and build a house before 99 nights pass. This crate is the
//! simulation core only: rendering and raw input capture are external
//! adapters that push actions into a [`GameSession`] and read state back
//! through its accessors or a [`Snapshot`].

pub mod data;
pub mod ecs;
pub mod game;
pub mod items;
pub mod minigames;
pub mod world;

// Re-export commonly used types
pub use ecs::{ControlBinding, PlayerId, Position};
pub use game::{GameRng, GameSession, Phase, SessionOutcome, Snapshot};
pub use items::{CraftItem, SharedInventory};
pub use minigames::{Minigame, MinigameKey, MinigameVariant};
pub use world::{World, WORLD_SIZE};
