use serde::{Deserialize, Serialize};

/// Discrete match occurrence categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Goal,
    YellowCard,
    RedCard,
    Shot,
    Pass,
    Tackle,
    Foul,
    Substitution,
}

impl EventType {
    /// Human-readable label for feed rendering.
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Goal => "Goal",
            EventType::YellowCard => "Yellow Card",
            EventType::RedCard => "Red Card",
            EventType::Shot => "Shot",
            EventType::Pass => "Pass",
            EventType::Tackle => "Tackle",
            EventType::Foul => "Foul",
            EventType::Substitution => "Substitution",
        }
    }
}

/// A timestamped occurrence attributed to a team and one of its roster
/// players. Weakly references its match by id for display grouping only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEvent {
    pub match_id: String,
    pub minute: u8,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub team: String,
    pub player: String,
    pub detail: String,
}
