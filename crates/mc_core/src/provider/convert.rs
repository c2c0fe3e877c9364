//! Provider record conversion
//!
//! Total conversions from the feed's fixture/event records into the
//! dashboard's own shapes. Missing optional fields substitute documented
//! defaults (0 score, "Unknown" names, "TBD" venue, Scheduled status);
//! nothing here returns an error.

use chrono::DateTime;

use super::records::{ProviderEventRecord, ProviderFixtureRecord};
use super::status::status_from_code;
use crate::data::UNKNOWN_PLAYER;
use crate::models::{
    EventType, MatchEvent, MatchState, MatchStatus, FULL_TIME_LABEL, HALF_TIME_LABEL,
};

const UNKNOWN_TEAM: &str = "Unknown";
const UNKNOWN_VENUE: &str = "TBD";

/// Convert a provider fixture record into a `MatchState`.
pub fn match_state_from_fixture(record: &ProviderFixtureRecord) -> MatchState {
    let status = record
        .fixture
        .status
        .as_ref()
        .and_then(|s| s.short.as_deref())
        .map(status_from_code)
        .unwrap_or(MatchStatus::Scheduled);

    let elapsed_minute = record.fixture.status.as_ref().and_then(|s| s.elapsed);
    let (elapsed, minute) = match status {
        MatchStatus::Live => {
            let m = elapsed_minute.unwrap_or(1).clamp(1, 90);
            (format!("{}'", m), Some(m))
        }
        MatchStatus::HalfTime => (HALF_TIME_LABEL.to_string(), None),
        MatchStatus::FullTime => (FULL_TIME_LABEL.to_string(), None),
        MatchStatus::Scheduled => (kickoff_label(record.fixture.date.as_deref()), None),
    };

    let (home_score, away_score) = if status == MatchStatus::Scheduled {
        (0, 0)
    } else {
        (record.goals.home.unwrap_or(0), record.goals.away.unwrap_or(0))
    };

    let match_id = match record.fixture.id {
        Some(id) => format!("npfl_{}", id),
        None => "npfl_unknown".to_string(),
    };

    MatchState {
        match_id,
        home_team: team_name(&record.teams.home),
        away_team: team_name(&record.teams.away),
        venue: record
            .fixture
            .venue
            .as_ref()
            .and_then(|v| v.name.clone())
            .unwrap_or_else(|| UNKNOWN_VENUE.to_string()),
        status,
        elapsed,
        minute,
        home_score,
        away_score,
    }
}

/// Convert a provider event record into a `MatchEvent`.
///
/// Category codes outside the known taxonomy fall back to a generic pass
/// event carrying the raw detail, so a new provider code never breaks the
/// feed.
pub fn match_event_from_record(record: &ProviderEventRecord, match_id: &str) -> MatchEvent {
    let detail_raw = record.detail.clone().unwrap_or_default();
    let (event_type, detail) = match record.kind.as_deref() {
        Some("Goal") => (EventType::Goal, or_default(detail_raw, "Normal Goal")),
        Some("Card") => {
            if detail_raw.contains("Red") || detail_raw.contains("Second Yellow") {
                (EventType::RedCard, or_default(detail_raw, "Red Card"))
            } else {
                (EventType::YellowCard, or_default(detail_raw, "Yellow Card"))
            }
        }
        Some("subst") => (EventType::Substitution, or_default(detail_raw, "Substitution")),
        Some("Var") => (EventType::Foul, or_default(detail_raw, "VAR review")),
        other => (
            EventType::Pass,
            or_default(detail_raw, other.unwrap_or("Unclassified")),
        ),
    };

    MatchEvent {
        match_id: match_id.to_string(),
        minute: record.time.as_ref().and_then(|t| t.elapsed).unwrap_or(0),
        event_type,
        team: team_name(&record.team),
        player: record
            .player
            .as_ref()
            .and_then(|p| p.name.clone())
            .unwrap_or_else(|| UNKNOWN_PLAYER.to_string()),
        detail,
    }
}

fn team_name(team: &Option<super::records::ProviderTeam>) -> String {
    team.as_ref()
        .and_then(|t| t.name.clone())
        .unwrap_or_else(|| UNKNOWN_TEAM.to_string())
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

/// Kickoff clock label from the provider's RFC 3339 date, "TBD" when the
/// date is missing or unparseable.
fn kickoff_label(date: Option<&str>) -> String {
    date.and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "TBD".to_string())
}
