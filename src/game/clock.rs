//! Day/night clock
//!
//! Phase is derived from the adapter's wall clock relative to a session
//! epoch, not from accumulated tick deltas, so transition detection is
//! independent of frame rate. Pausing must shift the epoch forward by the
//! paused duration or the schedule silently skips ahead.

use serde::Serialize;

/// One full day/night cycle
pub const DAY_LENGTH_MS: u64 = 120_000;
/// Cycle fraction where night starts
pub const NIGHT_START: f64 = 0.55;
/// Cycle fraction where night ends
pub const NIGHT_END: f64 = 0.95;
/// Nights survivable before the session is lost
pub const MAX_NIGHTS: u32 = 99;

/// Cyclic daylight classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Dawn,
    Day,
    Night,
}

impl Phase {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Dawn => "Dawn",
            Phase::Day => "Day",
            Phase::Night => "Night",
        }
    }
}

/// Discrete transitions observed by one clock sample
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleEvents {
    pub night_began: bool,
    pub day_began: bool,
}

/// Tracks the repeating day/night cycle and its transition events
#[derive(Debug, Clone)]
pub struct DayNightClock {
    epoch_ms: u64,
    last_sample_ms: u64,
    day_count: u32,
    nights_elapsed: u32,
}

impl DayNightClock {
    /// Start a fresh cycle anchored at `now_ms`
    pub fn new(now_ms: u64) -> Self {
        Self {
            epoch_ms: now_ms,
            last_sample_ms: now_ms,
            day_count: 1,
            nights_elapsed: 0,
        }
    }

    /// Fraction of the current cycle, in `[0, 1)`
    fn cycle_fraction(&self, now_ms: u64) -> f64 {
        let into_cycle = now_ms.saturating_sub(self.epoch_ms) % DAY_LENGTH_MS;
        into_cycle as f64 / DAY_LENGTH_MS as f64
    }

    /// Phase at the given time
    pub fn phase(&self, now_ms: u64) -> Phase {
        let p = self.cycle_fraction(now_ms);
        if p < 0.2 {
            Phase::Dawn
        } else if p < NIGHT_START {
            Phase::Day
        } else if p <= NIGHT_END {
            Phase::Night
        } else {
            Phase::Dawn
        }
    }

    /// True while the cycle is inside the night band
    pub fn is_night(&self, now_ms: u64) -> bool {
        let p = self.cycle_fraction(now_ms);
        (NIGHT_START..=NIGHT_END).contains(&p)
    }

    /// Sample the clock, comparing against the previous sample.
    ///
    /// Fires each transition once per true crossing regardless of how much
    /// time passed between samples. Callers decide what transitions mean;
    /// the clock only counts them.
    pub fn advance(&mut self, now_ms: u64) -> CycleEvents {
        let prev = self.cycle_fraction(self.last_sample_ms);
        let cur = self.cycle_fraction(now_ms);
        let prev_in_night = (NIGHT_START..=NIGHT_END).contains(&prev);
        let cur_in_night = (NIGHT_START..=NIGHT_END).contains(&cur);

        let events = CycleEvents {
            night_began: !prev_in_night && cur_in_night,
            day_began: prev <= NIGHT_END && cur > NIGHT_END,
        };

        if events.night_began {
            self.nights_elapsed += 1;
            log::debug!("night {} began", self.nights_elapsed);
        }
        if events.day_began {
            self.day_count += 1;
            log::debug!("day {} began", self.day_count);
        }

        self.last_sample_ms = now_ms;
        events
    }

    /// Shift the epoch forward after a pause so paused time never counts
    /// toward the cycle
    pub fn shift_epoch(&mut self, paused_ms: u64) {
        self.epoch_ms += paused_ms;
        self.last_sample_ms += paused_ms;
    }

    /// Days since the session started, 1-based
    pub fn day_count(&self) -> u32 {
        self.day_count
    }

    /// Nights that have begun so far
    pub fn nights_elapsed(&self) -> u32 {
        self.nights_elapsed
    }

    /// Nights remaining before the session is lost
    pub fn nights_left(&self) -> u32 {
        MAX_NIGHTS.saturating_sub(self.nights_elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_bands() {
        let clock = DayNightClock::new(0);
        assert_eq!(clock.phase(0), Phase::Dawn);
        assert_eq!(clock.phase(23_999), Phase::Dawn); // 0.1999...
        assert_eq!(clock.phase(24_000), Phase::Day); // 0.2
        assert_eq!(clock.phase(65_999), Phase::Day);
        assert_eq!(clock.phase(66_000), Phase::Night); // 0.55
        assert_eq!(clock.phase(114_000), Phase::Night); // 0.95
        assert_eq!(clock.phase(114_001), Phase::Dawn); // wrap band
        assert_eq!(clock.phase(120_000), Phase::Dawn); // next cycle
    }

    #[test]
    fn test_is_night_matches_band() {
        let clock = DayNightClock::new(0);
        assert!(!clock.is_night(65_999));
        assert!(clock.is_night(66_000));
        assert!(clock.is_night(114_000));
        assert!(!clock.is_night(114_001));
    }

    fn run_with_tick(tick_ms: u64, total_ms: u64) -> (u32, u32) {
        let mut clock = DayNightClock::new(0);
        let mut now = 0;
        while now < total_ms {
            now += tick_ms;
            clock.advance(now);
        }
        (clock.nights_elapsed(), clock.day_count())
    }

    #[test]
    fn test_transitions_independent_of_tick_granularity() {
        // Three full cycles, sampled fine and coarse
        let fine = run_with_tick(16, 3 * DAY_LENGTH_MS);
        let coarse = run_with_tick(250, 3 * DAY_LENGTH_MS);
        assert_eq!(fine, coarse);
        assert_eq!(fine.0, 3);
        assert_eq!(fine.1, 4); // day_count starts at 1
    }

    #[test]
    fn test_night_fires_once_per_crossing() {
        let mut clock = DayNightClock::new(0);
        let mut fired = 0;
        for now in (0..DAY_LENGTH_MS).step_by(16) {
            if clock.advance(now).night_began {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn test_shift_epoch_freezes_schedule() {
        let mut clock = DayNightClock::new(0);
        clock.advance(50_000);
        let before = clock.phase(50_000);

        // Pause for 30s: the phase at resume equals the phase at pause
        clock.shift_epoch(30_000);
        assert_eq!(clock.phase(80_000), before);

        // And the full trajectory is the unpaused one shifted by 30s
        let mut shifted = DayNightClock::new(0);
        shifted.advance(50_000);
        let mut now = 80_000;
        while now < 80_000 + 2 * DAY_LENGTH_MS {
            now += 100;
            clock.advance(now);
            shifted.advance(now - 30_000);
        }
        assert_eq!(clock.nights_elapsed(), shifted.nights_elapsed());
        assert_eq!(clock.day_count(), shifted.day_count());
    }

    #[test]
    fn test_nights_left_saturates() {
        let mut clock = DayNightClock::new(0);
        assert_eq!(clock.nights_left(), MAX_NIGHTS);
        let mut now = 0;
        while clock.nights_elapsed() <= MAX_NIGHTS {
            now += 1000;
            clock.advance(now);
        }
        assert_eq!(clock.nights_left(), 0);
    }
}
