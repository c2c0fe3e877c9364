//! Provider status code mapping
//!
//! Total over every short code the feed defines; anything unrecognized
//! classifies as Scheduled rather than erroring.

use crate::models::MatchStatus;

pub fn status_from_code(code: &str) -> MatchStatus {
    match code {
        "1H" | "2H" | "ET" | "P" | "LIVE" => MatchStatus::Live,
        "HT" | "BT" => MatchStatus::HalfTime,
        "FT" | "AET" | "PEN" | "AWD" | "WO" => MatchStatus::FullTime,
        // NS, TBD and the postponed/abandoned family all render as
        // not-started on the dashboard.
        _ => MatchStatus::Scheduled,
    }
}
