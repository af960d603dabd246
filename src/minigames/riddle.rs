//! Text-riddle minigame
//!
//! Builds an answer buffer from keystrokes; Enter evaluates the trimmed,
//! case-normalized buffer against the fixed answer.

use crate::minigames::{MinigameKey, Verdict};

const ANSWER: &str = "FAMILY";
const PROMPT: &str = "What do we protect and play with together?";

const SUCCESS: &str = "Riddle solved! You gained a sigil.";
const FAILURE: &str = "Wrong answer. (Hint: the people you play with.)";

/// State of one riddle attempt
#[derive(Debug, Clone, Default)]
pub struct Riddle {
    input: String,
}

impl Riddle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit the buffer, or evaluate it on Enter
    pub fn handle_key(&mut self, key: MinigameKey) -> Option<Verdict> {
        match key {
            MinigameKey::Enter => {
                if self.input.trim().to_uppercase() == ANSWER {
                    Some(Verdict::success(SUCCESS))
                } else {
                    Some(Verdict::failure(FAILURE))
                }
            }
            MinigameKey::Backspace => {
                self.input.pop();
                None
            }
            MinigameKey::Char(c) => {
                if c.is_ascii_alphanumeric() || c == ' ' {
                    self.input.push(c.to_ascii_uppercase());
                }
                None
            }
        }
    }

    /// The riddle shown to the player
    pub fn prompt(&self) -> &'static str {
        PROMPT
    }

    /// Current answer buffer
    pub fn input(&self) -> &str {
        &self.input
    }
}
