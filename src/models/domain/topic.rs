use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Study hours allotted to a topic of this difficulty.
    pub fn estimated_hours(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Topic {
    pub unit_name: String,
    pub topic_name: String,
    pub difficulty: Difficulty,
    pub estimated_hours: u32,
}

impl Topic {
    pub fn new(unit_name: &str, topic_name: &str, difficulty: Difficulty) -> Self {
        Topic {
            unit_name: unit_name.to_string(),
            topic_name: topic_name.to_string(),
            difficulty,
            estimated_hours: difficulty.estimated_hours(),
        }
    }
}
