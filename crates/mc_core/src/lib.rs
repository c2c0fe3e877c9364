//! # mc_core - Deterministic NPFL Match Dashboard Core
//!
//! Library behind the matchcast live dashboard. Match lifecycle state is a
//! pure function of the wall clock at minute resolution, so every refresh
//! recomputes from scratch and identical inputs give identical output.
//!
//! ## Features
//! - Deterministic lifecycle simulation (timestamp + match index → state)
//! - Event timeline generation consistent with the simulated score
//! - Bounded live feed with single-owner mutation
//! - Total conversion from third-party fixture/event payloads, with a
//!   simulator fallback so the dashboard always has data

pub mod api;
pub mod clock;
pub mod config;
pub mod data;
pub mod error;
pub mod models;
pub mod provider;
pub mod sim;

pub use api::{
    feed_json, health_json, match_detail_json, today_json, Dashboard, HealthStatus, MatchDetail,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::DashboardConfig;
pub use error::{CoreError, Result};
pub use models::{EventType, MatchEvent, MatchState, MatchStatistics, MatchStatus, Team};
pub use sim::{match_state_at, retrospective_events, states_for_day, LiveFeed};
