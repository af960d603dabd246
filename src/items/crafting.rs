//! Crafting rules
//!
//! Recipes convert wood and stone into tools. The recipe table can be
//! overridden by a data file; defaults live in [`RecipeBook::builtin`].

use serde::{Deserialize, Serialize};

use super::inventory::SharedInventory;

/// Items the crafting menu can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CraftItem {
    Shovel,
    HouseFrame,
}

impl CraftItem {
    /// Display name for messages
    pub fn label(&self) -> &'static str {
        match self {
            CraftItem::Shovel => "shovel",
            CraftItem::HouseFrame => "house frame",
        }
    }
}

/// Resource cost of one crafted unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Recipe {
    pub item: CraftItem,
    pub wood: u32,
    pub stone: u32,
}

/// The session's recipe table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// Hardcoded default recipes
    pub fn builtin() -> Self {
        Self {
            recipes: vec![
                Recipe { item: CraftItem::Shovel, wood: 3, stone: 2 },
                Recipe { item: CraftItem::HouseFrame, wood: 20, stone: 10 },
            ],
        }
    }

    /// Recipe for an item, if the table defines one
    pub fn recipe(&self, item: CraftItem) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.item == item)
    }
}

/// Attempt a craft against the shared inventory.
///
/// On success the cost is debited and exactly one unit credited. On failure
/// the inventory is unchanged. Either way the returned string is the message
/// to log.
pub fn craft(inv: &mut SharedInventory, book: &RecipeBook, item: CraftItem) -> (bool, String) {
    let Some(recipe) = book.recipe(item) else {
        return (false, format!("No recipe for a {}.", item.label()));
    };
    if inv.spend(recipe.wood, recipe.stone) {
        inv.credit(item);
        (true, format!("You crafted a {}.", item.label()))
    } else {
        (
            false,
            format!(
                "Not enough materials for a {} (needs {} wood, {} stone).",
                item.label(),
                recipe.wood,
                recipe.stone
            ),
        )
    }
}
