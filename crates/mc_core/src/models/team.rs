use serde::{Deserialize, Serialize};

/// Static club reference data. Loaded once from the embedded registry and
/// never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Team {
    pub id: u8,
    pub name: String,
    pub city: String,
    /// Short display glyph, e.g. "ENY"
    pub emblem: String,
    pub founded: u16,
    pub stadium: String,
    pub coach: String,
    /// Fixed squad list used for event attribution.
    pub roster: Vec<String>,
}

impl Team {
    /// "Name (CITY)" form used by compact table views.
    pub fn short_label(&self) -> String {
        format!("{} ({})", self.name, self.emblem)
    }
}
