//! Embedded reference data
//!
//! Team registry and fixture-set JSON are compiled into the binary via
//! `include_str!`, so no file I/O happens at runtime. Parsed once on first
//! access and cached for the process lifetime.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::models::{FixtureSet, Team};

/// NPFL club registry (~4KB)
pub const TEAMS_JSON: &str = include_str!("../../../../data/teams.json");

/// Rotating fixture groupings (~1KB)
pub const FIXTURE_SETS_JSON: &str = include_str!("../../../../data/fixture_sets.json");

#[derive(Debug, Deserialize)]
struct TeamsFile {
    teams: Vec<Team>,
}

#[derive(Debug, Deserialize)]
struct FixtureSetsFile {
    sets: Vec<FixtureSet>,
}

/// Parsed static reference data.
#[derive(Debug)]
pub struct Registry {
    teams: Vec<Team>,
    fixture_sets: Vec<FixtureSet>,
}

impl Registry {
    fn load() -> Self {
        let TeamsFile { teams } =
            serde_json::from_str(TEAMS_JSON).expect("Embedded team registry JSON is corrupted");
        let FixtureSetsFile { sets } = serde_json::from_str(FIXTURE_SETS_JSON)
            .expect("Embedded fixture set JSON is corrupted");

        // Resolve venues from the home side's stadium once, at load time.
        let fixture_sets = sets
            .into_iter()
            .map(|set| FixtureSet {
                fixtures: set
                    .fixtures
                    .into_iter()
                    .map(|mut fixture| {
                        fixture.venue = teams
                            .iter()
                            .find(|t| t.id == fixture.home)
                            .map(|t| t.stadium.clone())
                            .unwrap_or_else(|| "TBD".to_string());
                        fixture
                    })
                    .collect(),
            })
            .collect();

        Self { teams, fixture_sets }
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team_by_id(&self, id: u8) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_by_name(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn fixture_set_count(&self) -> usize {
        self.fixture_sets.len()
    }

    /// Active fixture set for a 0-based day of year.
    pub fn fixture_set_for_day(&self, day_of_year: u32) -> &FixtureSet {
        let index = (day_of_year as usize) % self.fixture_sets.len();
        &self.fixture_sets[index]
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::load);

/// Global registry accessor. First call parses the embedded JSON.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
