//! Item system
//!
//! The shared inventory both players draw from, and the crafting recipes
//! that convert raw resources into tools.

pub mod crafting;
pub mod inventory;

pub use crafting::{craft, CraftItem, Recipe, RecipeBook};
pub use inventory::{SharedInventory, MAX_SIGILS};
