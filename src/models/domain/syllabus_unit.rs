use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SyllabusUnit {
    pub unit_name: String,
    pub topics: Vec<String>,
}

impl SyllabusUnit {
    pub fn new(unit_name: impl Into<String>) -> Self {
        SyllabusUnit {
            unit_name: unit_name.into(),
            topics: Vec::new(),
        }
    }
}
