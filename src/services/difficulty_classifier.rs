use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::difficulty_keywords::{
    EASY_KEYWORDS, EASY_SUBJECTS, HARD_KEYWORDS, HARD_SUBJECTS, LEARNING_VERBS, MASTERY_VERBS,
    MATH_SYMBOLS, MEDIUM_KEYWORDS,
};
use crate::models::domain::Difficulty;

const KEYWORD_WEIGHT: u32 = 2;
const MIN_TOPIC_CHARS: usize = 3;

static VERSION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d+\.\d+|\bv\d+\b").expect("VERSION_REGEX is a valid regex pattern")
});

/// Scores a topic name into a coarse difficulty. Pure and deterministic.
pub fn classify_difficulty(topic_name: &str) -> Difficulty {
    if topic_name.trim().chars().count() < MIN_TOPIC_CHARS {
        return Difficulty::Medium;
    }

    let lowered = topic_name.to_lowercase();
    keyword_verdict(&lowered).unwrap_or_else(|| {
        match complexity_score(topic_name, &lowered) {
            i32::MIN..=2 => Difficulty::Easy,
            3..=5 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    })
}

fn keyword_score(lowered: &str, keywords: &[&str]) -> u32 {
    keywords
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count() as u32
        * KEYWORD_WEIGHT
}

fn keyword_verdict(lowered: &str) -> Option<Difficulty> {
    let easy = keyword_score(lowered, EASY_KEYWORDS);
    let medium = keyword_score(lowered, MEDIUM_KEYWORDS);
    let hard = keyword_score(lowered, HARD_KEYWORDS);

    if easy > medium && easy > hard && easy > 0 {
        Some(Difficulty::Easy)
    } else if hard > easy && hard > medium && hard > 0 {
        Some(Difficulty::Hard)
    } else if medium > 0 {
        Some(Difficulty::Medium)
    } else {
        None
    }
}

/// Structural score used when no keyword list decides the topic.
fn complexity_score(raw: &str, lowered: &str) -> i32 {
    let words: Vec<&str> = raw.split_whitespace().collect();
    let mut score = match words.len() {
        0..=2 => 0,
        3..=4 => 1,
        5..=6 => 2,
        _ => 3,
    };

    score += match words.iter().filter(|w| is_technical_term(w)).count() {
        0 => 0,
        1 => 1,
        _ => 2,
    };

    if raw.contains(MATH_SYMBOLS) {
        score += 2;
    }
    if VERSION_REGEX.is_match(lowered) {
        score += 1;
    }
    if HARD_SUBJECTS.iter().any(|s| lowered.contains(s)) {
        score += 2;
    }
    if EASY_SUBJECTS.iter().any(|s| lowered.contains(s)) {
        score -= 2;
    }
    if LEARNING_VERBS.iter().any(|v| lowered.contains(v)) {
        score -= 1;
    }
    if MASTERY_VERBS.iter().any(|v| lowered.contains(v)) {
        score += 2;
    }

    score
}

/// Mixed case after the first character (`JavaScript`) or any digit (`Python3`).
fn is_technical_term(word: &str) -> bool {
    word.chars().skip(1).any(char::is_uppercase) || word.chars().any(|c| c.is_ascii_digit())
}
