//! Derived match statistics
//!
//! Display filler for the detail view, generated once per view. The only
//! hard constraints: possession splits to 100 and shot counts never
//! contradict the lifecycle score.

use rand::Rng;

use crate::models::{MatchState, MatchStatistics, MatchStatus};

pub fn derive_statistics<R: Rng>(rng: &mut R, state: &MatchState) -> MatchStatistics {
    if state.status == MatchStatus::Scheduled {
        // Nothing has happened yet; an even, empty stat line.
        return MatchStatistics {
            match_id: state.match_id.clone(),
            home_team: state.home_team.clone(),
            away_team: state.away_team.clone(),
            possession_home: 50,
            possession_away: 50,
            ..Default::default()
        };
    }

    let possession_home = rng.gen_range(35..=65);
    let on_target_home = state.home_score + rng.gen_range(0..=4);
    let on_target_away = state.away_score + rng.gen_range(0..=4);

    MatchStatistics {
        match_id: state.match_id.clone(),
        home_team: state.home_team.clone(),
        away_team: state.away_team.clone(),
        possession_home,
        possession_away: 100 - possession_home,
        shots_home: on_target_home + rng.gen_range(0..=6),
        shots_away: on_target_away + rng.gen_range(0..=6),
        shots_on_target_home: on_target_home,
        shots_on_target_away: on_target_away,
        corners_home: rng.gen_range(0..=9),
        corners_away: rng.gen_range(0..=9),
        fouls_home: rng.gen_range(2..=14),
        fouls_away: rng.gen_range(2..=14),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state(status: MatchStatus, home: u8, away: u8) -> MatchState {
        MatchState {
            match_id: "npfl_343_1".to_string(),
            home_team: "Rangers International".to_string(),
            away_team: "Plateau United".to_string(),
            venue: "Nnamdi Azikiwe Stadium".to_string(),
            status,
            elapsed: "FT".to_string(),
            minute: None,
            home_score: home,
            away_score: away,
        }
    }

    #[test]
    fn test_scheduled_stat_line_is_neutral() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut scheduled = state(MatchStatus::Scheduled, 0, 0);
        scheduled.elapsed = "18:00".to_string();
        let stats = derive_statistics(&mut rng, &scheduled);
        assert_eq!(stats.possession_home, 50);
        assert_eq!(stats.shots_home, 0);
        assert_eq!(stats.shots_away, 0);
    }

    proptest! {
        #[test]
        fn prop_statistics_are_coherent(home in 0u8..=4, away in 0u8..=4, seed in 0u64..500) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let state = state(MatchStatus::FullTime, home, away);
            let stats = derive_statistics(&mut rng, &state);
            prop_assert!(stats.is_coherent(home, away), "incoherent stats: {:?}", stats);
        }
    }
}
