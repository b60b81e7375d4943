pub const BLANK_MARKER: &str = "______";

pub const MAX_QUESTIONS_PER_SEGMENT: usize = 4;
pub const SENTENCES_PER_QUIZ: usize = 3;
pub const MIN_QUESTION_TOKENS: usize = 5;
pub const MIN_TRUE_FALSE_TOKENS: usize = 11;

/// Padding for fill-in-the-blank questions once the sentence runs out of candidates.
pub const GENERIC_DISTRACTORS: &[&str] = &["None of these", "All of the above", "Cannot be determined"];

pub const COMPREHENSION_PROMPT: &str = "What is the main topic discussed in this section?";
pub const COMPREHENSION_DISTRACTORS: &[&str] =
    &["General Information", "Historical Facts", "Scientific Theory"];

pub const FALLBACK_PROMPT: &str = "What is discussed in this section?";
pub const FALLBACK_DISTRACTORS: &[&str] = &["Unrelated Topic", "General Knowledge", "None of these"];

/// Used when a fixed distractor collides with the correct answer.
pub const SPARE_DISTRACTORS: &[&str] = &["Other Subject", "Miscellaneous", "Unknown"];
