//! Live event feed state
//!
//! Explicit state object for the rolling feed. All mutation goes through
//! `push`/`clear`; the dashboard controller is the single owner, so no
//! locking is needed.

use crate::models::MatchEvent;

/// Bounded, minute-ordered event list (most recent first).
#[derive(Debug, Clone)]
pub struct LiveFeed {
    events: Vec<MatchEvent>,
    cap: usize,
}

impl LiveFeed {
    pub fn new(cap: usize) -> Self {
        Self { events: Vec::with_capacity(cap), cap }
    }

    /// Insert an event, keep the list sorted by non-increasing minute, and
    /// drop everything past the cap.
    pub fn push(&mut self, event: MatchEvent) {
        self.events.insert(0, event);
        // Stable sort keeps the fresh event ahead of equal-minute ones.
        self.events.sort_by(|a, b| b.minute.cmp(&a.minute));
        self.events.truncate(self.cap);
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventType;

    fn event(minute: u8, player: &str) -> MatchEvent {
        MatchEvent {
            match_id: "npfl_343_0".to_string(),
            minute,
            event_type: EventType::Pass,
            team: "Enyimba FC".to_string(),
            player: player.to_string(),
            detail: "Switch of play".to_string(),
        }
    }

    #[test]
    fn test_feed_never_exceeds_cap() {
        let mut feed = LiveFeed::new(20);
        for i in 0..100 {
            feed.push(event((i % 90) as u8 + 1, "Chijioke Akuneto"));
            assert!(feed.len() <= 20, "cap exceeded after {} pushes", i + 1);
        }
        assert_eq!(feed.len(), 20);
    }

    #[test]
    fn test_feed_sorted_non_increasing_after_each_push() {
        let mut feed = LiveFeed::new(20);
        for minute in [12u8, 80, 3, 45, 45, 90, 1] {
            feed.push(event(minute, "Rabiu Ali"));
            for pair in feed.events().windows(2) {
                assert!(pair[0].minute >= pair[1].minute);
            }
        }
    }

    #[test]
    fn test_fresh_event_leads_equal_minutes() {
        let mut feed = LiveFeed::new(20);
        feed.push(event(45, "first"));
        feed.push(event(45, "second"));
        assert_eq!(feed.events()[0].player, "second");
        assert_eq!(feed.events()[1].player, "first");
    }

    #[test]
    fn test_truncation_drops_oldest_low_minutes() {
        let mut feed = LiveFeed::new(3);
        for minute in [10u8, 20, 30, 40] {
            feed.push(event(minute, "Rabiu Ali"));
        }
        let minutes: Vec<u8> = feed.events().iter().map(|e| e.minute).collect();
        assert_eq!(minutes, vec![40, 30, 20]);
    }

    #[test]
    fn test_clear_empties_feed() {
        let mut feed = LiveFeed::new(5);
        feed.push(event(10, "Rabiu Ali"));
        assert!(!feed.is_empty());
        feed.clear();
        assert!(feed.is_empty());
    }
}
