//! Shrine minigames
//!
//! At most one minigame is active per session. While one is running it owns
//! every tick and every pointer/keystroke; the overworld is suspended.
//!
//! Pointer coordinates live on a fixed virtual surface ([`SURFACE_W`] x
//! [`SURFACE_H`]); render adapters scale real pointer positions into it.

pub mod riddle;
pub mod sequence;
pub mod targets;

pub use riddle::Riddle;
pub use sequence::SequenceRecall;
pub use targets::{Target, TargetCapture};

use serde::{Deserialize, Serialize};

use crate::game::GameRng;

/// Width of the virtual pointer surface
pub const SURFACE_W: f64 = 800.0;
/// Height of the virtual pointer surface
pub const SURFACE_H: f64 = 600.0;

/// Which minigame a shrine launches; assigned in shrine placement order so
/// each variant appears exactly once per world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MinigameVariant {
    SequenceRecall,
    TargetCapture,
    Riddle,
}

impl MinigameVariant {
    /// Variant for a placement index
    pub fn from_index(i: usize) -> Self {
        match i {
            0 => MinigameVariant::SequenceRecall,
            1 => MinigameVariant::TargetCapture,
            _ => MinigameVariant::Riddle,
        }
    }

    /// Placement index of this variant
    pub fn index(self) -> usize {
        match self {
            MinigameVariant::SequenceRecall => 0,
            MinigameVariant::TargetCapture => 1,
            MinigameVariant::Riddle => 2,
        }
    }
}

/// A keystroke routed to an active minigame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MinigameKey {
    Char(char),
    Backspace,
    Enter,
}

/// The single resolution every minigame produces exactly once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub success: bool,
    pub message: &'static str,
}

impl Verdict {
    pub fn success(message: &'static str) -> Self {
        Self { success: true, message }
    }

    pub fn failure(message: &'static str) -> Self {
        Self { success: false, message }
    }
}

/// The active minigame, dispatched by variant
#[derive(Debug, Clone)]
pub enum Minigame {
    Sequence(SequenceRecall),
    Targets(TargetCapture),
    Riddle(Riddle),
}

impl Minigame {
    /// Start the minigame for a shrine variant
    pub fn start(variant: MinigameVariant, rng: &mut GameRng, now_ms: u64) -> Self {
        match variant {
            MinigameVariant::SequenceRecall => Minigame::Sequence(SequenceRecall::new(rng, now_ms)),
            MinigameVariant::TargetCapture => Minigame::Targets(TargetCapture::new(rng, now_ms)),
            MinigameVariant::Riddle => Minigame::Riddle(Riddle::new()),
        }
    }

    pub fn variant(&self) -> MinigameVariant {
        match self {
            Minigame::Sequence(_) => MinigameVariant::SequenceRecall,
            Minigame::Targets(_) => MinigameVariant::TargetCapture,
            Minigame::Riddle(_) => MinigameVariant::Riddle,
        }
    }

    /// Per-tick update while this minigame owns the session
    pub fn update(&mut self, now_ms: u64) -> Option<Verdict> {
        match self {
            Minigame::Sequence(g) => g.update(now_ms),
            Minigame::Targets(g) => g.update(now_ms),
            Minigame::Riddle(_) => None,
        }
    }

    /// A pointer press on the virtual surface
    pub fn handle_pointer(&mut self, x: f64, y: f64) -> Option<Verdict> {
        match self {
            Minigame::Sequence(g) => g.handle_pointer(x, y),
            Minigame::Targets(g) => g.handle_pointer(x, y),
            Minigame::Riddle(_) => None,
        }
    }

    /// A keystroke
    pub fn handle_key(&mut self, key: MinigameKey) -> Option<Verdict> {
        match self {
            Minigame::Riddle(g) => g.handle_key(key),
            _ => None,
        }
    }
}
