pub mod events;
pub mod fixture;
pub mod match_state;
pub mod statistics;
pub mod team;

pub use events::{EventType, MatchEvent};
pub use fixture::{Fixture, FixtureSet};
pub use match_state::{MatchState, MatchStatus, FULL_TIME_LABEL, HALF_TIME_LABEL};
pub use statistics::MatchStatistics;
pub use team::Team;
