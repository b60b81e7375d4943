use serde::{Deserialize, Serialize};

use crate::models::domain::question::Question;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Segment {
    pub title: String,
    pub content: Vec<String>,
    pub key_points: Vec<String>, // prefix of `content`, or a synthetic sentence for placeholders
    #[serde(default)]
    pub quiz: Vec<Question>, // attached once by the quiz synthesizer
}

impl Segment {
    pub fn new(title: impl Into<String>, content: Vec<String>, key_points: Vec<String>) -> Self {
        Segment {
            title: title.into(),
            content,
            key_points,
            quiz: Vec::new(),
        }
    }

    /// Title with any `" - Part n"` style suffix removed.
    pub fn base_title(&self) -> &str {
        match self.title.find(" - ") {
            Some(idx) => self.title[..idx].trim(),
            None => self.title.trim(),
        }
    }

    pub fn has_content(&self) -> bool {
        self.content.iter().any(|s| !s.trim().is_empty())
    }
}
