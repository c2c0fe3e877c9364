use serde::{Deserialize, Serialize};

/// Per-match display statistics for the detail view. Generated once per
/// view; display filler with no replay-determinism requirement, except
/// that shot counts never contradict the score and possession sums to 100.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MatchStatistics {
    pub match_id: String,
    pub home_team: String,
    pub away_team: String,
    pub possession_home: u8,
    pub possession_away: u8,
    pub shots_home: u8,
    pub shots_away: u8,
    pub shots_on_target_home: u8,
    pub shots_on_target_away: u8,
    pub corners_home: u8,
    pub corners_away: u8,
    pub fouls_home: u8,
    pub fouls_away: u8,
}

impl MatchStatistics {
    /// Internal consistency of the generated numbers.
    pub fn is_coherent(&self, home_score: u8, away_score: u8) -> bool {
        self.possession_home + self.possession_away == 100
            && self.shots_on_target_home <= self.shots_home
            && self.shots_on_target_away <= self.shots_away
            && self.shots_on_target_home >= home_score
            && self.shots_on_target_away >= away_score
    }
}
