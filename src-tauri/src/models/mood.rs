use serde::{Deserialize, Serialize};

/// The four moods a user can record.
///
/// The variant names double as the on-disk labels, so the set is closed by
/// construction and log lines never need escaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Angry,
    Sad,
    Neutral,
}

impl Mood {
    pub const ALL: [Mood; 4] = [Mood::Happy, Mood::Angry, Mood::Sad, Mood::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Angry => "Angry",
            Mood::Sad => "Sad",
            Mood::Neutral => "Neutral",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Happy" => Some(Mood::Happy),
            "Angry" => Some(Mood::Angry),
            "Sad" => Some(Mood::Sad),
            "Neutral" => Some(Mood::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
