//! Target-capture minigame
//!
//! Five circular targets appear; the player must click them all inside the
//! time limit. Timeout is reported by the per-tick update, not the click
//! handler.

use serde::Serialize;

use crate::game::GameRng;
use crate::minigames::{Verdict, SURFACE_H, SURFACE_W};

/// Targets spawned per attempt
pub const TARGET_COUNT: usize = 5;
/// Click radius of each target
pub const TARGET_RADIUS: f64 = 18.0;
/// Time allowed to capture them all
pub const TIME_LIMIT_MS: u64 = 10_000;

/// Keep targets away from the surface edges
const EDGE_MARGIN: f64 = 60.0;

const SUCCESS: &str = "Great aim! You gained a sigil.";
const FAILURE: &str = "You ran out of time.";

/// One clickable circle
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Target {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// State of one target-capture attempt
#[derive(Debug, Clone)]
pub struct TargetCapture {
    targets: Vec<Target>,
    captured: usize,
    started_at: u64,
}

impl TargetCapture {
    /// Spawn the targets and start the timer
    pub fn new(rng: &mut GameRng, now_ms: u64) -> Self {
        let targets = (0..TARGET_COUNT)
            .map(|_| Target {
                x: rng.gen_range_f64(EDGE_MARGIN, SURFACE_W - EDGE_MARGIN),
                y: rng.gen_range_f64(EDGE_MARGIN, SURFACE_H - EDGE_MARGIN),
                radius: TARGET_RADIUS,
            })
            .collect();
        Self {
            targets,
            captured: 0,
            started_at: now_ms,
        }
    }

    /// Fail once the timer lapses
    pub fn update(&mut self, now_ms: u64) -> Option<Verdict> {
        if now_ms.saturating_sub(self.started_at) > TIME_LIMIT_MS {
            Some(Verdict::failure(FAILURE))
        } else {
            None
        }
    }

    /// Capture the first target under the pointer, if any
    pub fn handle_pointer(&mut self, x: f64, y: f64) -> Option<Verdict> {
        if let Some(hit) = self
            .targets
            .iter()
            .position(|t| (x - t.x).hypot(y - t.y) <= t.radius)
        {
            self.targets.remove(hit);
            self.captured += 1;
        }
        if self.captured >= TARGET_COUNT {
            Some(Verdict::success(SUCCESS))
        } else {
            None
        }
    }

    /// Targets still standing
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Targets captured so far
    pub fn captured(&self) -> usize {
        self.captured
    }

    /// Milliseconds remaining on the timer
    pub fn time_left_ms(&self, now_ms: u64) -> u64 {
        TIME_LIMIT_MS.saturating_sub(now_ms.saturating_sub(self.started_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_spawn_inside_margin() {
        let mut rng = GameRng::new(1);
        let game = TargetCapture::new(&mut rng, 0);
        assert_eq!(game.targets().len(), TARGET_COUNT);
        for t in game.targets() {
            assert!(t.x >= EDGE_MARGIN && t.x < SURFACE_W - EDGE_MARGIN);
            assert!(t.y >= EDGE_MARGIN && t.y < SURFACE_H - EDGE_MARGIN);
        }
    }

    #[test]
    fn test_capture_all_succeeds() {
        let mut rng = GameRng::new(2);
        let mut game = TargetCapture::new(&mut rng, 0);
        let mut verdict = None;
        while verdict.is_none() {
            let t = game.targets()[0];
            verdict = game.handle_pointer(t.x, t.y);
        }
        assert!(verdict.unwrap().success);
        assert_eq!(game.captured(), TARGET_COUNT);
    }

    #[test]
    fn test_miss_captures_nothing() {
        let mut rng = GameRng::new(3);
        let mut game = TargetCapture::new(&mut rng, 0);
        // A corner click can't be within radius of any in-margin target
        assert!(game.handle_pointer(0.0, 0.0).is_none());
        assert_eq!(game.captured(), 0);
        assert_eq!(game.targets().len(), TARGET_COUNT);
    }

    #[test]
    fn test_timeout_fails_via_update() {
        let mut rng = GameRng::new(4);
        let mut game = TargetCapture::new(&mut rng, 1000);
        assert!(game.update(1000 + TIME_LIMIT_MS).is_none());
        let verdict = game.update(1001 + TIME_LIMIT_MS).unwrap();
        assert!(!verdict.success);
    }

    #[test]
    fn test_time_left_counts_down() {
        let mut rng = GameRng::new(5);
        let game = TargetCapture::new(&mut rng, 0);
        assert_eq!(game.time_left_ms(0), TIME_LIMIT_MS);
        assert_eq!(game.time_left_ms(4000), TIME_LIMIT_MS - 4000);
        assert_eq!(game.time_left_ms(20_000), 0);
    }
}
