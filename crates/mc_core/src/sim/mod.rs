//! Deterministic match simulation
//!
//! `lifecycle` derives a match's status/score snapshot from the wall clock;
//! `timeline` populates event lists consistent with that snapshot; `feed`
//! owns the rolling live feed; `stats` fills the detail-view numbers.

pub mod feed;
pub mod lifecycle;
pub mod stats;
pub mod timeline;

pub use feed::LiveFeed;
pub use lifecycle::{match_state_at, score_bucket, states_for_day, CYCLE_MINUTES};
pub use stats::derive_statistics;
pub use timeline::{retrospective_events, synthesize_live_event, GOAL_DETAILS, LIVE_CATEGORIES};
