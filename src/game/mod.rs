//! Game module - session orchestration, clock, randomness, and messages

pub mod clock;
pub mod messages;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use clock::{CycleEvents, DayNightClock, Phase, DAY_LENGTH_MS, MAX_NIGHTS};
pub use messages::{Message, MessageLog, MESSAGE_TTL_MS};
pub use rng::GameRng;
pub use session::{GameSession, LossCause, SessionOutcome};
pub use snapshot::{MinigameView, PlayerView, Snapshot};
