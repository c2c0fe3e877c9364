//! Dashboard controller
//!
//! Single owner of all mutable presentation state (the live feed, the RNG,
//! the cached health snapshot). Timer callbacks in the binary drive it; the
//! controller itself never spawns anything, so no synchronization is needed.

use std::collections::BTreeMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};
use crate::config::DashboardConfig;
use crate::error::Result;
use crate::models::{MatchEvent, MatchState, MatchStatistics};
use crate::sim::{
    derive_statistics, match_state_at, retrospective_events, states_for_day,
    synthesize_live_event, LiveFeed,
};

/// Full detail payload for one match view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchDetail {
    pub state: MatchState,
    pub events: Vec<MatchEvent>,
    pub statistics: MatchStatistics,
}

/// Cached service health snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub service: String,
    pub version: String,
    pub status: String,
    pub checked_at: String,
    pub dependencies: BTreeMap<String, String>,
}

impl HealthStatus {
    fn snapshot(checked_at: String) -> Self {
        let mut dependencies = BTreeMap::new();
        dependencies.insert("registry".to_string(), "loaded".to_string());
        dependencies.insert("simulator".to_string(), "healthy".to_string());
        Self {
            service: "matchcast".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            status: "healthy".to_string(),
            checked_at,
            dependencies,
        }
    }
}

pub struct Dashboard<C: Clock> {
    clock: C,
    rng: ChaCha8Rng,
    feed: LiveFeed,
    health: HealthStatus,
}

impl Dashboard<SystemClock> {
    /// Production dashboard on the system clock. The RNG seeds from entropy
    /// unless the configuration pins a seed for a reproducible run.
    pub fn new(config: &DashboardConfig) -> Self {
        Self::with_clock(SystemClock, config)
    }
}

impl<C: Clock> Dashboard<C> {
    pub fn with_clock(clock: C, config: &DashboardConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let health = HealthStatus::snapshot(clock.now().format("%Y-%m-%dT%H:%M:%S").to_string());
        Self { clock, rng, feed: LiveFeed::new(config.feed_cap), health }
    }

    /// All of today's matches, recomputed from the clock.
    pub fn today(&self) -> Vec<MatchState> {
        states_for_day(self.clock.now())
    }

    /// Per-match detail: lifecycle state, retrospective timeline, display
    /// statistics. Fails only on an out-of-range match index.
    pub fn match_detail(&mut self, match_index: usize) -> Result<MatchDetail> {
        let state = match_state_at(self.clock.now(), match_index)?;
        let events = retrospective_events(&mut self.rng, &state);
        let statistics = derive_statistics(&mut self.rng, &state);
        Ok(MatchDetail { state, events, statistics })
    }

    /// Live-mode step: synthesize one event across the in-play matches and
    /// fold it into the feed. Returns the new event, or `None` when nothing
    /// is in play this tick.
    pub fn tick_feed(&mut self) -> Option<MatchEvent> {
        let states = self.today();
        let event = synthesize_live_event(&mut self.rng, &states)?;
        self.feed.push(event.clone());
        Some(event)
    }

    pub fn feed(&self) -> &[MatchEvent] {
        self.feed.events()
    }

    pub fn health(&self) -> &HealthStatus {
        &self.health
    }
}
