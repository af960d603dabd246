//! Message log
//!
//! Short-lived informational messages for the message ticker. Purely
//! observational; nothing in the simulation reads it back.

use serde::Serialize;

/// How long a message stays visible
pub const MESSAGE_TTL_MS: u64 = 5000;

/// One log entry
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub text: String,
    pub created_at: u64,
}

/// Ordered log of live messages
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message stamped with the current time
    pub fn push(&mut self, text: impl Into<String>, now_ms: u64) {
        self.entries.push(Message {
            text: text.into(),
            created_at: now_ms,
        });
    }

    /// Drop entries older than [`MESSAGE_TTL_MS`]
    pub fn prune(&mut self, now_ms: u64) {
        self.entries
            .retain(|m| now_ms.saturating_sub(m.created_at) <= MESSAGE_TTL_MS);
    }

    /// Live entries, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    /// Most recent entry
    pub fn latest(&self) -> Option<&Message> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_expires_old_messages() {
        let mut log = MessageLog::new();
        log.push("first", 0);
        log.push("second", 3000);
        log.prune(5001);
        let texts: Vec<&str> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["second"]);
        log.prune(8001);
        assert!(log.is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let mut log = MessageLog::new();
        log.push("a", 10);
        log.push("b", 20);
        assert_eq!(log.latest().unwrap().text, "b");
        let texts: Vec<&str> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);
    }
}
