use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::segment::Segment;

/// Everything produced for one study request, handed to the session store as a unit.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StudyMaterial {
    pub session_id: String,
    pub topic: String,
    pub segments: Vec<Segment>,
    pub sources: Vec<String>,
    pub suggestions: Vec<String>,
    pub quiz_enabled: bool,
    pub insufficient_material: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl StudyMaterial {
    pub fn new(topic: &str, segments: Vec<Segment>, sources: Vec<String>) -> Self {
        StudyMaterial {
            session_id: uuid::Uuid::new_v4().to_string(),
            topic: topic.to_string(),
            segments,
            sources,
            suggestions: Vec::new(),
            quiz_enabled: true,
            insufficient_material: false,
            created_at: Some(Utc::now()),
        }
    }

    pub fn question_count(&self) -> usize {
        self.segments.iter().map(|s| s.quiz.len()).sum()
    }
}
