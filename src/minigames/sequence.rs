//! Sequence-recall minigame
//!
//! A short symbol sequence plays back, one symbol at a time; the player then
//! repeats it by clicking the matching screen quadrant. The first wrong
//! click fails the attempt.

use crate::game::GameRng;
use crate::minigames::{Verdict, SURFACE_H, SURFACE_W};

/// Symbols in the target sequence
pub const SEQUENCE_LENGTH: usize = 2;
/// Distinct symbols (one per screen quadrant)
pub const SYMBOL_COUNT: i32 = 4;
/// How long each symbol is shown during playback
pub const PLAYBACK_STEP_MS: u64 = 700;

const SUCCESS: &str = "Sequence matched! You gained a sigil.";
const FAILURE: &str = "You lost the sequence. Try another shrine later.";

/// State of one sequence-recall attempt
#[derive(Debug, Clone)]
pub struct SequenceRecall {
    target: Vec<u8>,
    playback_index: usize,
    showing: bool,
    segment_started: u64,
    input: Vec<u8>,
}

impl SequenceRecall {
    /// Roll a fresh target sequence and begin playback
    pub fn new(rng: &mut GameRng, now_ms: u64) -> Self {
        let target = (0..SEQUENCE_LENGTH)
            .map(|_| rng.gen_index(SYMBOL_COUNT) as u8)
            .collect();
        Self {
            target,
            playback_index: 0,
            showing: true,
            segment_started: now_ms,
            input: Vec::new(),
        }
    }

    /// Advance playback; input is not accepted until playback completes
    pub fn update(&mut self, now_ms: u64) -> Option<Verdict> {
        if self.showing && now_ms.saturating_sub(self.segment_started) > PLAYBACK_STEP_MS {
            self.playback_index += 1;
            self.segment_started = now_ms;
            if self.playback_index >= self.target.len() {
                self.showing = false;
                self.playback_index = 0;
            }
        }
        None
    }

    /// Classify a click into a quadrant and match it against the target
    pub fn handle_pointer(&mut self, x: f64, y: f64) -> Option<Verdict> {
        if self.showing {
            return None;
        }
        let quadrant = match (x < SURFACE_W / 2.0, y < SURFACE_H / 2.0) {
            (true, true) => 0,
            (false, true) => 1,
            (true, false) => 2,
            (false, false) => 3,
        };
        self.input.push(quadrant);

        let idx = self.input.len() - 1;
        if self.input[idx] != self.target[idx] {
            Some(Verdict::failure(FAILURE))
        } else if self.input.len() == self.target.len() {
            Some(Verdict::success(SUCCESS))
        } else {
            None
        }
    }

    /// True while the target sequence is still playing back
    pub fn showing(&self) -> bool {
        self.showing
    }

    /// Symbol highlighted by playback, if playback is running
    pub fn highlighted(&self) -> Option<u8> {
        if self.showing {
            let idx = self.playback_index.min(self.target.len() - 1);
            Some(self.target[idx])
        } else {
            None
        }
    }

    /// Correct symbols entered so far
    pub fn entered(&self) -> usize {
        self.input.len()
    }

    /// Total symbols to repeat
    pub fn total(&self) -> usize {
        self.target.len()
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> &[u8] {
        &self.target
    }
}
