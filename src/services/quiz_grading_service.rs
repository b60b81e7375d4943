use std::collections::HashMap;

use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Question, Segment};
use crate::models::dto::request::SubmitQuizRequest;
use crate::models::dto::response::{QuestionResult, QuizResult, NOT_ANSWERED};

pub struct QuizGradingService;

impl QuizGradingService {
    /// Grade answers keyed by question index. Matching is exact.
    pub fn grade_quiz(questions: &[Question], answers: &HashMap<usize, String>) -> QuizResult {
        let details: Vec<QuestionResult> = questions
            .iter()
            .enumerate()
            .map(|(idx, question)| Self::grade_question(question, answers.get(&idx)))
            .collect();

        let score = details.iter().filter(|d| d.is_correct).count();
        let total = questions.len();

        QuizResult {
            score,
            total,
            percentage: percentage(score, total),
            details,
        }
    }

    /// Grade the quiz attached to `segments[segment_index]`.
    pub fn grade_segment(
        segments: &[Segment],
        segment_index: usize,
        answers: &HashMap<usize, String>,
    ) -> AppResult<QuizResult> {
        let segment = segments.get(segment_index).ok_or_else(|| {
            AppError::NotFound(format!(
                "Segment {} not found ({} segments)",
                segment_index,
                segments.len()
            ))
        })?;

        if segment.quiz.is_empty() {
            return Err(AppError::ValidationError(format!(
                "Segment '{}' has no quiz questions",
                segment.title
            )));
        }

        let result = Self::grade_quiz(&segment.quiz, answers);
        log::info!(
            "Graded segment {} ('{}'): {}/{}",
            segment_index,
            segment.title,
            result.score,
            result.total
        );
        Ok(result)
    }

    /// Validate a submission, then grade the segment it points at.
    pub fn grade_submission(segments: &[Segment], submission: &SubmitQuizRequest) -> AppResult<QuizResult> {
        submission.validate()?;
        Self::grade_segment(segments, submission.segment_index, &submission.answers)
    }

    fn grade_question(question: &Question, answer: Option<&String>) -> QuestionResult {
        let is_correct = answer.is_some_and(|a| *a == question.answer);
        QuestionResult {
            question: question.question.clone(),
            options: question.options.clone(),
            user_answer: answer.cloned().unwrap_or_else(|| NOT_ANSWERED.to_string()),
            correct_answer: question.answer.clone(),
            is_correct,
        }
    }
}

/// Percentage rounded to one decimal place; zero when there is nothing to grade.
fn percentage(score: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (score as f64 / total as f64 * 1000.0).round() / 10.0
}
