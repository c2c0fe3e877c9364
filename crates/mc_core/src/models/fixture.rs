use serde::{Deserialize, Serialize};

/// A scheduled pairing of two teams for a given day. Immutable once the
/// day's fixture set is selected; the venue is the home side's stadium.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Fixture {
    pub home: u8,
    pub away: u8,
    /// Resolved at registry load time from the home team's stadium.
    #[serde(default)]
    pub venue: String,
}

/// One of the rotating groupings of fixtures, keyed by day-of-year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixtureSet {
    pub fixtures: Vec<Fixture>,
}

impl FixtureSet {
    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}
