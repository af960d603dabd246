//! Render snapshot
//!
//! An owned, serializable view of everything a render adapter needs for one
//! frame. The adapter reads it; nothing here can mutate the session.

use serde::Serialize;

use crate::ecs::{ControlBinding, PlayerId, Position};
use crate::game::clock::Phase;
use crate::game::messages::Message;
use crate::items::SharedInventory;
use crate::minigames::{targets::TARGET_COUNT, Minigame, Target};
use crate::world::{Chamber, Shrine};

/// One player as a renderer sees it
#[derive(Debug, Clone, Serialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub pos: Position,
    pub binding: ControlBinding,
}

/// Render state of the active minigame, without its hidden internals
#[derive(Debug, Clone, Serialize)]
pub enum MinigameView {
    Sequence {
        showing: bool,
        highlighted: Option<u8>,
        entered: usize,
        total: usize,
    },
    Targets {
        targets: Vec<Target>,
        captured: usize,
        total: usize,
        time_left_ms: u64,
    },
    Riddle {
        prompt: &'static str,
        input: String,
    },
}

impl MinigameView {
    /// Project the active minigame into render state
    pub fn of(game: &Minigame, now_ms: u64) -> Self {
        match game {
            Minigame::Sequence(g) => MinigameView::Sequence {
                showing: g.showing(),
                highlighted: g.highlighted(),
                entered: g.entered(),
                total: g.total(),
            },
            Minigame::Targets(g) => MinigameView::Targets {
                targets: g.targets().to_vec(),
                captured: g.captured(),
                total: TARGET_COUNT,
                time_left_ms: g.time_left_ms(now_ms),
            },
            Minigame::Riddle(g) => MinigameView::Riddle {
                prompt: g.prompt(),
                input: g.input().to_string(),
            },
        }
    }
}

/// Full per-frame view of the session
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub seed: u32,
    pub day_count: u32,
    pub nights_elapsed: u32,
    pub nights_left: u32,
    pub phase: Phase,
    pub is_night: bool,
    pub paused: bool,
    pub won: bool,
    pub lost: bool,
    pub view_target: PlayerId,
    pub players: [PlayerView; 2],
    pub enemies: Vec<Position>,
    pub trees: Vec<Position>,
    pub rocks: Vec<Position>,
    pub dug: Vec<Position>,
    pub shrines: Vec<Shrine>,
    pub chamber: Chamber,
    pub inventory: SharedInventory,
    pub messages: Vec<Message>,
    pub minigame: Option<MinigameView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameRng;
    use crate::minigames::MinigameVariant;

    #[test]
    fn test_riddle_view_carries_buffer() {
        let mut rng = GameRng::new(1);
        let mut game = Minigame::start(MinigameVariant::Riddle, &mut rng, 0);
        game.handle_key(crate::minigames::MinigameKey::Char('f'));
        match MinigameView::of(&game, 0) {
            MinigameView::Riddle { input, .. } => assert_eq!(input, "F"),
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn test_targets_view_counts_down() {
        let mut rng = GameRng::new(2);
        let game = Minigame::start(MinigameVariant::TargetCapture, &mut rng, 0);
        match MinigameView::of(&game, 2500) {
            MinigameView::Targets { targets, captured, total, time_left_ms } => {
                assert_eq!(targets.len(), 5);
                assert_eq!(captured, 0);
                assert_eq!(total, 5);
                assert_eq!(time_left_ms, 7500);
            }
            other => panic!("unexpected view: {other:?}"),
        }
    }
}
