use std::collections::HashMap;

use serde::Deserialize;
use validator::{Validate, ValidationError};

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_has_answers(answers: &HashMap<usize, String>) -> Result<(), ValidationError> {
    if answers.is_empty() {
        return Err(ValidationError::new("no_answers"));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateStudyRequest {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub query: String,

    pub user_notes: Option<String>,

    pub uploaded_text: Option<String>,

    pub quiz_enabled: Option<bool>,
}

impl GenerateStudyRequest {
    pub fn for_query(query: &str) -> Self {
        Self {
            query: query.to_string(),
            user_notes: None,
            uploaded_text: None,
            quiz_enabled: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateScheduleRequest {
    #[validate(length(min = 1, max = 200), custom(function = "validate_not_blank"))]
    pub subject: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub syllabus: String,

    /// Upper bound is `Config::max_schedule_days`, checked by the service.
    #[validate(range(min = 1))]
    pub total_days: Option<i64>,

    pub start_date: Option<String>, // YYYY-MM-DD
}

/// Answers keyed by question index within the segment's quiz.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    pub segment_index: usize,

    #[serde(default)]
    #[validate(custom(function = "validate_has_answers"))]
    pub answers: HashMap<usize, String>,
}
