//! Static reference data
//!
//! Single source of truth for clubs, rosters and fixture sets. Every other
//! module references teams by id or name through this registry; no table is
//! duplicated elsewhere.

pub mod embedded;

pub use embedded::{registry, Registry, FIXTURE_SETS_JSON, TEAMS_JSON};

/// Placeholder used when a team name cannot be resolved to a roster.
pub const UNKNOWN_PLAYER: &str = "Unknown Player";

/// Roster lookup with the documented degradation: an unknown team yields a
/// single placeholder entry instead of an error.
pub fn roster_or_placeholder(team_name: &str) -> Vec<String> {
    match registry().team_by_name(team_name) {
        Some(team) => team.roster.clone(),
        None => {
            log::debug!("No roster for team '{}', using placeholder", team_name);
            vec![UNKNOWN_PLAYER.to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_team_roster() {
        let roster = roster_or_placeholder("Enyimba FC");
        assert!(roster.len() > 1);
        assert!(!roster.contains(&UNKNOWN_PLAYER.to_string()));
    }

    #[test]
    fn test_unknown_team_degrades_to_placeholder() {
        let roster = roster_or_placeholder("Jupiter Wanderers");
        assert_eq!(roster, vec![UNKNOWN_PLAYER.to_string()]);
    }
}
