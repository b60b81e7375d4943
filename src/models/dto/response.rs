use serde::Serialize;

use crate::models::domain::ScheduleItem;

pub const NOT_ANSWERED: &str = "Not answered";

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleResponse {
    pub subject: String,
    pub items: Vec<ScheduleItem>,
    pub total_topics: usize,
    pub total_hours: u32,
}

impl ScheduleResponse {
    pub fn new(subject: &str, items: Vec<ScheduleItem>) -> Self {
        ScheduleResponse {
            subject: subject.to_string(),
            total_topics: items.len(),
            total_hours: items.iter().map(|i| i.estimated_hours).sum(),
            items,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionResult {
    pub question: String,
    pub options: Vec<String>,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub score: usize,
    pub total: usize,
    pub percentage: f64,
    pub details: Vec<QuestionResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::{Difficulty, Topic};
    use chrono::NaiveDate;

    #[test]
    fn test_schedule_response_totals() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).expect("valid date");
        let items = vec![
            ScheduleItem::for_topic(&Topic::new("U", "Arrays", Difficulty::Easy), date, 9, 11),
            ScheduleItem::for_topic(&Topic::new("U", "Graphs", Difficulty::Hard), date, 14, 18),
        ];

        let response = ScheduleResponse::new("Algorithms", items);
        assert_eq!(response.total_topics, 2);
        assert_eq!(response.total_hours, 6);
    }
}
