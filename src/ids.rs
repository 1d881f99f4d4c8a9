//! Item Id Generation
//!
//! Ids are creation timestamps in Unix milliseconds, bumped past the last
//! issued id so two items created in the same millisecond never collide.

use chrono::Utc;

use crate::models::ItemId;

/// Current wall clock in Unix milliseconds
pub fn now_millis() -> ItemId {
    Utc::now().timestamp_millis()
}

/// Strictly increasing id source for one session
#[derive(Debug, Clone, Copy, Default)]
pub struct IdGenerator {
    last: Option<ItemId>,
}

impl IdGenerator {
    pub fn issue(&mut self) -> ItemId {
        self.issue_at(now_millis())
    }

    /// Issue an id for a creation happening at `now_ms`
    pub fn issue_at(&mut self, now_ms: ItemId) -> ItemId {
        let id = match self.last {
            Some(last) if now_ms <= last => last + 1,
            _ => now_ms,
        };
        self.last = Some(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_timestamp_when_clock_advances() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.issue_at(1_000), 1_000);
        assert_eq!(ids.issue_at(1_500), 1_500);
    }

    #[test]
    fn test_same_millisecond_is_bumped() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.issue_at(1_000), 1_000);
        assert_eq!(ids.issue_at(1_000), 1_001);
        assert_eq!(ids.issue_at(1_000), 1_002);
        // Clock stepping backwards still yields a fresh id
        assert_eq!(ids.issue_at(900), 1_003);
        assert_eq!(ids.issue_at(2_000), 2_000);
    }
}
