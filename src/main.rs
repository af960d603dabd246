//! Hearthbound - headless demo runner
//!
//! Drives a scripted session through the full progression on an accelerated
//! clock and dumps a final JSON snapshot. This doubles as a smoke harness
//! for the simulation core; real frontends replace it with render/input
//! adapters that call the same [`GameSession`] API.

use std::collections::HashSet;

use anyhow::{Context, Result};
use hearthbound::game::{GameSession, SessionOutcome};
use hearthbound::minigames::{SURFACE_H, SURFACE_W};
use hearthbound::{CraftItem, Minigame, MinigameKey, PlayerId, Position};

/// Simulated milliseconds per loop iteration
const TICK_MS: u64 = 100;
/// Give the script plenty of simulated time before giving up
const MAX_TICKS: u64 = 200_000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => Some(
            arg.parse::<u32>()
                .context("seed must be a 32-bit unsigned integer")?,
        ),
        None => None,
    };
    let mut session = match seed {
        Some(seed) => GameSession::with_seed(seed, 0),
        None => GameSession::new(0),
    };
    log::info!("running scripted demo, seed {}", session.seed());

    let mut bot = Bot::default();
    let mut now = 0;
    for _ in 0..MAX_TICKS {
        now += TICK_MS;
        session.tick(now);
        if session.is_terminal() {
            break;
        }
        bot.act(&mut session);
    }

    match session.outcome() {
        SessionOutcome::Won => log::info!(
            "demo won: house built on day {}",
            session.clock().day_count()
        ),
        SessionOutcome::Lost { .. } => log::info!("demo lost: {:?}", session.outcome()),
        SessionOutcome::Active => log::warn!("demo stopped: tick budget exhausted"),
    }

    let json = serde_json::to_string_pretty(&session.snapshot())?;
    println!("{json}");
    Ok(())
}

/// What the bot decides to do on one tick
enum Plan {
    Craft(CraftItem),
    GotoInteract(Position),
    Dig,
    FindBuildSite,
    Idle,
}

/// Tiny scripted player standing in for two humans
#[derive(Default)]
struct Bot {
    /// Symbols observed during sequence playback
    playback: Vec<u8>,
}

impl Bot {
    fn act(&mut self, session: &mut GameSession) {
        if session.in_minigame() {
            self.play_minigame(session);
            return;
        }
        self.playback.clear();

        let plan = self.plan(session);
        let p1 = PlayerId::One;
        match plan {
            Plan::Craft(item) => session.craft(item),
            Plan::GotoInteract(target) => {
                if step_toward(session, p1, target) {
                    session.interact(p1);
                }
            }
            Plan::Dig => session.dig(p1),
            Plan::FindBuildSite => {
                let pos = session.player_position(p1);
                let world = session.world();
                let claimed = world.shrine_at(pos).is_some() || world.chamber.pos == pos;
                if !world.is_obstructed(pos) && !claimed {
                    session.interact(p1);
                } else if pos.x < hearthbound::WORLD_SIZE - 1 {
                    session.move_player(p1, 1, 0);
                } else {
                    session.move_player(p1, -1, 1);
                }
            }
            Plan::Idle => {}
        }

        // Player two tags along, exercising the second action stream
        let lead = session.player_position(p1);
        step_toward(session, PlayerId::Two, lead);
    }

    fn plan(&self, session: &GameSession) -> Plan {
        let inv = session.inventory();
        let world = session.world();
        let pos = session.player_position(PlayerId::One);

        if !inv.has_shovel() {
            if inv.wood() >= 3 && inv.stone() >= 2 {
                return Plan::Craft(CraftItem::Shovel);
            }
            let wanted = if inv.wood() < 3 { &world.trees } else { &world.rocks };
            return match nearest(wanted, pos) {
                Some(target) => Plan::GotoInteract(target),
                None => Plan::Idle,
            };
        }
        if !inv.has_all_sigils() {
            let shrine = world.shrines[inv.sigils() as usize % world.shrines.len()];
            return Plan::GotoInteract(shrine.pos);
        }
        if !inv.child_rescued() {
            if pos == world.chamber.pos && !world.dug.contains(&pos) {
                return Plan::Dig;
            }
            return Plan::GotoInteract(world.chamber.pos);
        }
        if !inv.house_built() {
            if inv.has_house_frame() {
                return Plan::FindBuildSite;
            }
            if inv.wood() >= 20 && inv.stone() >= 10 {
                return Plan::Craft(CraftItem::HouseFrame);
            }
            let wanted = if inv.wood() < 20 { &world.trees } else { &world.rocks };
            return match nearest(wanted, pos) {
                Some(target) => Plan::GotoInteract(target),
                None => Plan::Idle,
            };
        }
        Plan::Idle
    }

    fn play_minigame(&mut self, session: &mut GameSession) {
        enum Act {
            Click(f64, f64),
            Key(MinigameKey),
            Wait,
        }

        let act = match session.minigame() {
            Some(Minigame::Sequence(g)) => {
                if g.showing() {
                    // Watch the playback; consecutive repeats collapse and
                    // are re-expanded below
                    if let Some(symbol) = g.highlighted() {
                        if self.playback.last() != Some(&symbol) {
                            self.playback.push(symbol);
                        }
                    }
                    Act::Wait
                } else {
                    let mut target = self.playback.clone();
                    while target.len() < g.total() {
                        target.push(target.last().copied().unwrap_or(0));
                    }
                    let next = target.get(g.entered()).copied().unwrap_or(0);
                    let (x, y) = quadrant_center(next);
                    Act::Click(x, y)
                }
            }
            Some(Minigame::Targets(g)) => match g.targets().first() {
                Some(t) => Act::Click(t.x, t.y),
                None => Act::Wait,
            },
            Some(Minigame::Riddle(g)) => {
                const ANSWER: &str = "FAMILY";
                let typed = g.input().len();
                if typed < ANSWER.len() {
                    Act::Key(MinigameKey::Char(ANSWER.as_bytes()[typed] as char))
                } else {
                    Act::Key(MinigameKey::Enter)
                }
            }
            None => Act::Wait,
        };

        match act {
            Act::Click(x, y) => session.minigame_pointer(x, y),
            Act::Key(key) => session.minigame_key(key),
            Act::Wait => {}
        }
    }
}

/// One grid step toward the target; true once standing on it
fn step_toward(session: &mut GameSession, id: PlayerId, target: Position) -> bool {
    let pos = session.player_position(id);
    if pos == target {
        return true;
    }
    session.move_player(id, (target.x - pos.x).signum(), (target.y - pos.y).signum());
    false
}

/// Closest member of a tile set
fn nearest(set: &HashSet<Position>, from: Position) -> Option<Position> {
    set.iter()
        .copied()
        .min_by(|a, b| a.distance(&from).total_cmp(&b.distance(&from)))
}

/// Center of a sequence quadrant on the virtual surface
fn quadrant_center(quadrant: u8) -> (f64, f64) {
    match quadrant {
        0 => (SURFACE_W * 0.25, SURFACE_H * 0.25),
        1 => (SURFACE_W * 0.75, SURFACE_H * 0.25),
        2 => (SURFACE_W * 0.25, SURFACE_H * 0.75),
        _ => (SURFACE_W * 0.75, SURFACE_H * 0.75),
    }
}
