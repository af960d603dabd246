//! Entity Component System module
//!
//! Defines the components and systems for players and night creatures.

pub mod components;
pub mod systems;

pub use components::*;
pub use systems::{count_enemies, enemy_contact, enemy_positions, update_enemies};
