//! JSON API
//!
//! Serialized response payloads for the presentation layer. Every response
//! carries a `schema_version` so clients can detect shape changes.

use serde::Serialize;

use super::dashboard::{Dashboard, HealthStatus, MatchDetail};
use crate::clock::Clock;
use crate::error::Result;
use crate::models::{MatchEvent, MatchState};

pub const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Serialize)]
pub struct TodayResponse {
    pub schema_version: u8,
    pub matches: Vec<MatchState>,
}

#[derive(Debug, Serialize)]
pub struct FeedResponse {
    pub schema_version: u8,
    pub events: Vec<MatchEvent>,
}

#[derive(Debug, Serialize)]
pub struct MatchDetailResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub detail: MatchDetail,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub schema_version: u8,
    #[serde(flatten)]
    pub health: HealthStatus,
}

pub fn today_json<C: Clock>(dashboard: &Dashboard<C>) -> Result<String> {
    let response = TodayResponse { schema_version: SCHEMA_VERSION, matches: dashboard.today() };
    Ok(serde_json::to_string(&response)?)
}

pub fn feed_json<C: Clock>(dashboard: &Dashboard<C>) -> Result<String> {
    let response =
        FeedResponse { schema_version: SCHEMA_VERSION, events: dashboard.feed().to_vec() };
    Ok(serde_json::to_string(&response)?)
}

pub fn match_detail_json<C: Clock>(
    dashboard: &mut Dashboard<C>,
    match_index: usize,
) -> Result<String> {
    let detail = dashboard.match_detail(match_index)?;
    let response = MatchDetailResponse { schema_version: SCHEMA_VERSION, detail };
    Ok(serde_json::to_string(&response)?)
}

pub fn health_json<C: Clock>(dashboard: &Dashboard<C>) -> Result<String> {
    let response =
        HealthResponse { schema_version: SCHEMA_VERSION, health: dashboard.health().clone() };
    Ok(serde_json::to_string(&response)?)
}
