//! Provider payload shapes
//!
//! Serde mirrors of the third-party feed's fixture and event records. Every
//! field the conversion reads is optional: the feed omits fields freely and
//! the mapping must stay total.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderFixtureRecord {
    #[serde(default)]
    pub fixture: ProviderFixtureInfo,
    #[serde(default)]
    pub teams: ProviderTeams,
    #[serde(default)]
    pub goals: ProviderGoals,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderFixtureInfo {
    #[serde(default)]
    pub id: Option<i64>,
    /// RFC 3339 kickoff timestamp.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub status: Option<ProviderStatus>,
    #[serde(default)]
    pub venue: Option<ProviderVenue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderStatus {
    /// Short status code, e.g. "NS", "1H", "HT", "FT".
    #[serde(default)]
    pub short: Option<String>,
    /// Elapsed minute while in play.
    #[serde(default)]
    pub elapsed: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderVenue {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderTeams {
    #[serde(default)]
    pub home: Option<ProviderTeam>,
    #[serde(default)]
    pub away: Option<ProviderTeam>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderTeam {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderGoals {
    #[serde(default)]
    pub home: Option<u8>,
    #[serde(default)]
    pub away: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderEventRecord {
    #[serde(default)]
    pub time: Option<ProviderEventTime>,
    #[serde(default)]
    pub team: Option<ProviderTeam>,
    #[serde(default)]
    pub player: Option<ProviderPlayer>,
    /// Event category, e.g. "Goal", "Card", "subst".
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Category refinement, e.g. "Normal Goal", "Yellow Card".
    #[serde(default)]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderEventTime {
    #[serde(default)]
    pub elapsed: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderPlayer {
    #[serde(default)]
    pub name: Option<String>,
}
