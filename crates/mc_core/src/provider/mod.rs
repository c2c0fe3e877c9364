//! Third-party data source integration
//!
//! The live feed supplies fixtures and events in its own shapes; this module
//! converts them into dashboard shapes. Conversions are total, and a failed
//! or empty provider path falls back to the deterministic simulator so the
//! presentation layer always has renderable data.

pub mod convert;
pub mod records;
pub mod status;

pub use convert::{match_event_from_record, match_state_from_fixture};
pub use records::{ProviderEventRecord, ProviderFixtureRecord};
pub use status::status_from_code;

use chrono::NaiveDateTime;

use crate::models::MatchState;
use crate::sim::states_for_day;

/// Provider-first match list with the mandated simulator fallback: when the
/// provider yields nothing (network failure upstream, empty response), the
/// day's simulated states are served instead.
pub fn states_or_fallback(records: &[ProviderFixtureRecord], now: NaiveDateTime) -> Vec<MatchState> {
    if records.is_empty() {
        log::info!("Provider returned no fixtures, falling back to simulator");
        return states_for_day(now);
    }
    records.iter().map(match_state_from_fixture).collect()
}
