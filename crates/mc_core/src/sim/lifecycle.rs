//! Match Lifecycle Simulator
//!
//! Pure mapping from `(timestamp, match index)` to a `MatchState`. Every 120
//! real minutes is one complete simulated match cycle (first half, half-time,
//! second half, full-time gap). Matches within a set are phase-shifted by 20
//! minutes per index so they are never simultaneous.
//!
//! The computation is closed-form arithmetic at minute resolution: calling it
//! twice within the same clock minute yields bit-identical results. No side
//! effects, no I/O, no randomness.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::data::registry;
use crate::error::{CoreError, Result};
use crate::models::{MatchState, MatchStatus, FULL_TIME_LABEL, HALF_TIME_LABEL};

/// One simulated match cycle in real minutes.
pub const CYCLE_MINUTES: u32 = 120;

/// Phase shift between adjacent matches in the same set.
pub const INDEX_OFFSET_MINUTES: u32 = 20;

/// First kickoff hour for scheduled matches; later indices kick off later.
pub const KICKOFF_BASE_HOUR: u32 = 18;

// Cycle phase bands. Half-time is inclusive of both ends: the band covers
// phases 45..=50, and the second half resumes at phase 51 with minute 46.
const FIRST_HALF_END: u32 = 45;
const HALF_TIME_END: u32 = 50;
const SECOND_HALF_END: u32 = 95;
const FULL_TIME_END: u32 = 105;

/// Derive the state of one of today's matches at the given instant.
///
/// `match_index` addresses a fixture within the day's active set and must be
/// in `[0, set.len())`; it is the one input that cannot be normalized by
/// modulo, so it is rejected up front.
pub fn match_state_at(now: NaiveDateTime, match_index: usize) -> Result<MatchState> {
    let day_of_year = now.date().ordinal0();
    let set = registry().fixture_set_for_day(day_of_year);
    if match_index >= set.len() {
        return Err(CoreError::InvalidMatchIndex { index: match_index, len: set.len() });
    }

    let fixture = &set.fixtures[match_index];
    let home = registry()
        .team_by_id(fixture.home)
        .ok_or_else(|| CoreError::DataError(format!("no team with id {}", fixture.home)))?;
    let away = registry()
        .team_by_id(fixture.away)
        .ok_or_else(|| CoreError::DataError(format!("no team with id {}", fixture.away)))?;

    let minute_of_day = now.hour() * 60 + now.minute();
    let (status, elapsed, minute) = phase_snapshot(minute_of_day, match_index);

    let (home_score, away_score) = if status == MatchStatus::Scheduled {
        (0, 0)
    } else {
        (
            side_score(minute_of_day, 2 * match_index as u32),
            side_score(minute_of_day, 2 * match_index as u32 + 1),
        )
    };

    Ok(MatchState {
        match_id: format!("npfl_{}_{}", day_of_year, match_index),
        home_team: home.name.clone(),
        away_team: away.name.clone(),
        venue: fixture.venue.clone(),
        status,
        elapsed,
        minute,
        home_score,
        away_score,
    })
}

/// All of today's matches, in fixture order.
pub fn states_for_day(now: NaiveDateTime) -> Vec<MatchState> {
    let day_of_year = now.date().ordinal0();
    let count = registry().fixture_set_for_day(day_of_year).len();
    (0..count)
        .map(|index| {
            match_state_at(now, index).expect("index within active fixture set is always valid")
        })
        .collect()
}

/// Status, elapsed label and live minute for a match at a minute of day.
fn phase_snapshot(minute_of_day: u32, match_index: usize) -> (MatchStatus, String, Option<u8>) {
    let cycle_minutes = minute_of_day % CYCLE_MINUTES;
    let index_offset = match_index as u32 * INDEX_OFFSET_MINUTES;
    let phase = (cycle_minutes + index_offset) % CYCLE_MINUTES;

    if phase < FIRST_HALF_END {
        let minute = ((cycle_minutes + match_index as u32 * 15) % 90 + 1) as u8;
        (MatchStatus::Live, format!("{}'", minute), Some(minute))
    } else if phase <= HALF_TIME_END {
        (MatchStatus::HalfTime, HALF_TIME_LABEL.to_string(), None)
    } else if phase < SECOND_HALF_END {
        let minute = (45 + (phase - HALF_TIME_END)) as u8;
        (MatchStatus::Live, format!("{}'", minute), Some(minute))
    } else if phase < FULL_TIME_END {
        (MatchStatus::FullTime, FULL_TIME_LABEL.to_string(), None)
    } else {
        let kickoff_hour = (KICKOFF_BASE_HOUR + match_index as u32) % 24;
        (MatchStatus::Scheduled, format!("{:02}:00", kickoff_hour), None)
    }
}

/// Score for one side. `seed` is `2*index` for home and `2*index + 1` for
/// away, so the two sides of a match never share a bucketing input.
fn side_score(minute_of_day: u32, seed: u32) -> u8 {
    score_bucket((minute_of_day + seed * 17) % 100)
}

/// Bucket a combined seed value in `[0, 100)` into a score. Monotonic:
/// a larger input never yields a smaller score.
pub fn score_bucket(value: u32) -> u8 {
    if value < 30 {
        0
    } else if value < 55 {
        1
    } else if value < 75 {
        2
    } else if value < 90 {
        3
    } else {
        4
    }
}
