//! ECS Components
//!
//! Components for the session's entity world: the two players and the
//! ephemeral night creatures.

use serde::{Deserialize, Serialize};

// ============================================================================
// Position & Movement
// ============================================================================

/// Position on the world grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position
    pub fn distance(&self, other: &Position) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }

    /// Clamp both axes into `[0, size)`
    pub fn clamped(self, size: i32) -> Self {
        Self {
            x: self.x.clamp(0, size - 1),
            y: self.y.clamp(0, size - 1),
        }
    }
}

// ============================================================================
// Players
// ============================================================================

/// Which of the two local players an entity or action belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// The other player
    pub fn other(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Zero-based index for array storage
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }
}

/// Marks an entity as a player
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: PlayerId,
    pub binding: ControlBinding,
}

/// Key names a player's local input maps to.
///
/// The core never reads the keyboard; this is data for help screens and for
/// the input adapter to route key events to the right player.
#[derive(Debug, Clone, Serialize)]
pub struct ControlBinding {
    pub up: &'static str,
    pub down: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub interact: &'static str,
    pub dig: &'static str,
}

impl ControlBinding {
    /// WASD + E/F layout for player one
    pub fn player_one() -> Self {
        Self {
            up: "KeyW",
            down: "KeyS",
            left: "KeyA",
            right: "KeyD",
            interact: "KeyE",
            dig: "KeyF",
        }
    }

    /// Arrow keys + right-hand modifiers for player two
    pub fn player_two() -> Self {
        Self {
            up: "ArrowUp",
            down: "ArrowDown",
            left: "ArrowLeft",
            right: "ArrowRight",
            interact: "ShiftRight",
            dig: "ControlRight",
        }
    }
}

// ============================================================================
// Enemies
// ============================================================================

/// Marks an entity as a night creature
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    /// Spawn order within the session; despawn removes the newest first
    pub ordinal: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_clamped_to_world() {
        assert_eq!(Position::new(-3, 70).clamped(60), Position::new(0, 59));
        assert_eq!(Position::new(12, 34).clamped(60), Position::new(12, 34));
    }

    #[test]
    fn test_player_id_other() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
    }
}
