//! Shared inventory
//!
//! One inventory for the whole session; either player's actions mutate it.

use serde::{Deserialize, Serialize};

use super::crafting::CraftItem;

/// Sigil count is capped here no matter how many minigames are won
pub const MAX_SIGILS: u32 = 3;

/// Jointly owned counters for both players.
///
/// `child` and `house_built` are 0/1 flags kept as counters so the whole
/// record renders uniformly in inventory views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SharedInventory {
    wood: u32,
    stone: u32,
    shovel: u32,
    sigils: u32,
    child: u32,
    house_frame: u32,
    house_built: u32,
}

impl SharedInventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wood(&self) -> u32 {
        self.wood
    }

    pub fn stone(&self) -> u32 {
        self.stone
    }

    pub fn shovel(&self) -> u32 {
        self.shovel
    }

    pub fn sigils(&self) -> u32 {
        self.sigils
    }

    pub fn house_frame(&self) -> u32 {
        self.house_frame
    }

    /// Add one harvested wood
    pub fn add_wood(&mut self) {
        self.wood += 1;
    }

    /// Add one harvested stone
    pub fn add_stone(&mut self) {
        self.stone += 1;
    }

    /// Award a sigil, clamped at [`MAX_SIGILS`]
    pub fn grant_sigil(&mut self) {
        self.sigils = (self.sigils + 1).min(MAX_SIGILS);
    }

    /// True once every sigil has been collected
    pub fn has_all_sigils(&self) -> bool {
        self.sigils >= MAX_SIGILS
    }

    pub fn has_shovel(&self) -> bool {
        self.shovel > 0
    }

    pub fn child_rescued(&self) -> bool {
        self.child > 0
    }

    /// One-way flag set when the chamber is opened
    pub fn rescue_child(&mut self) {
        self.child = 1;
    }

    pub fn has_house_frame(&self) -> bool {
        self.house_frame > 0
    }

    pub fn house_built(&self) -> bool {
        self.house_built > 0
    }

    /// Consume a frame and mark the house standing
    pub fn build_house(&mut self) {
        self.house_frame -= 1;
        self.house_built = 1;
    }

    /// Debit resources, returns false (unchanged) if either is short
    pub fn spend(&mut self, wood: u32, stone: u32) -> bool {
        if self.wood >= wood && self.stone >= stone {
            self.wood -= wood;
            self.stone -= stone;
            true
        } else {
            false
        }
    }

    /// Credit exactly one unit of a crafted item
    pub fn credit(&mut self, item: CraftItem) {
        match item {
            CraftItem::Shovel => self.shovel += 1,
            CraftItem::HouseFrame => self.house_frame += 1,
        }
    }
}
