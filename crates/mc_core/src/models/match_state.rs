use serde::{Deserialize, Serialize};

/// Lifecycle phase of a match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    Live,
    HalfTime,
    FullTime,
}

impl MatchStatus {
    /// Whether the match currently contributes to the live event feed.
    pub fn is_in_play(&self) -> bool {
        matches!(self, MatchStatus::Live | MatchStatus::HalfTime)
    }

    /// Canonical provider-style short code ("NS", "LIVE", "HT", "FT").
    pub fn code(&self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "NS",
            MatchStatus::Live => "LIVE",
            MatchStatus::HalfTime => "HT",
            MatchStatus::FullTime => "FT",
        }
    }
}

pub const HALF_TIME_LABEL: &str = "HT";
pub const FULL_TIME_LABEL: &str = "FT";

/// Derived snapshot of a match at a point in time. Recomputed on every
/// query from the current timestamp; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchState {
    pub match_id: String,
    pub home_team: String,
    pub away_team: String,
    pub venue: String,
    pub status: MatchStatus,
    /// Display label: "37'" while live, "HT", "FT", or a kickoff clock time.
    pub elapsed: String,
    /// Elapsed minute while live. Absent for Scheduled matches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute: Option<u8>,
    pub home_score: u8,
    pub away_score: u8,
}

impl MatchState {
    /// Upper bound for event minutes consistent with the current status.
    pub fn elapsed_bound(&self) -> u8 {
        match self.status {
            MatchStatus::Scheduled => 0,
            MatchStatus::Live => self.minute.unwrap_or(1),
            MatchStatus::HalfTime => 45,
            MatchStatus::FullTime => 90,
        }
    }

    /// Status and elapsed label must always agree. Used by tests and by the
    /// provider conversion to validate constructed states.
    pub fn label_consistent(&self) -> bool {
        match self.status {
            MatchStatus::HalfTime => self.elapsed == HALF_TIME_LABEL,
            MatchStatus::FullTime => self.elapsed == FULL_TIME_LABEL,
            MatchStatus::Live => self.elapsed.ends_with('\'') && self.minute.is_some(),
            MatchStatus::Scheduled => {
                self.elapsed != HALF_TIME_LABEL && !self.elapsed.ends_with('\'')
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(status: MatchStatus, elapsed: &str, minute: Option<u8>) -> MatchState {
        MatchState {
            match_id: "npfl_0_0".to_string(),
            home_team: "Enyimba FC".to_string(),
            away_team: "Kano Pillars".to_string(),
            venue: "Enyimba International Stadium".to_string(),
            status,
            elapsed: elapsed.to_string(),
            minute,
            home_score: 0,
            away_score: 0,
        }
    }

    #[test]
    fn test_in_play_statuses() {
        assert!(MatchStatus::Live.is_in_play());
        assert!(MatchStatus::HalfTime.is_in_play());
        assert!(!MatchStatus::Scheduled.is_in_play());
        assert!(!MatchStatus::FullTime.is_in_play());
    }

    #[test]
    fn test_label_consistency() {
        assert!(state(MatchStatus::HalfTime, "HT", None).label_consistent());
        assert!(state(MatchStatus::FullTime, "FT", None).label_consistent());
        assert!(state(MatchStatus::Live, "37'", Some(37)).label_consistent());
        assert!(state(MatchStatus::Scheduled, "18:00", None).label_consistent());
        // Mismatched combinations must be rejected
        assert!(!state(MatchStatus::HalfTime, "46'", Some(46)).label_consistent());
        assert!(!state(MatchStatus::Scheduled, "12'", None).label_consistent());
    }

    #[test]
    fn test_elapsed_bound_by_status() {
        assert_eq!(state(MatchStatus::Scheduled, "18:00", None).elapsed_bound(), 0);
        assert_eq!(state(MatchStatus::Live, "37'", Some(37)).elapsed_bound(), 37);
        assert_eq!(state(MatchStatus::HalfTime, "HT", None).elapsed_bound(), 45);
        assert_eq!(state(MatchStatus::FullTime, "FT", None).elapsed_bound(), 90);
    }
}
