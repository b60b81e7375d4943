use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::quiz_defaults::{
    BLANK_MARKER, COMPREHENSION_DISTRACTORS, COMPREHENSION_PROMPT, FALLBACK_DISTRACTORS,
    FALLBACK_PROMPT, GENERIC_DISTRACTORS, MAX_QUESTIONS_PER_SEGMENT, MIN_QUESTION_TOKENS,
    MIN_TRUE_FALSE_TOKENS, SENTENCES_PER_QUIZ, SPARE_DISTRACTORS,
};
use crate::models::domain::{Question, Segment};

const DISTRACTOR_COUNT: usize = 3;
const SENTENCE_DISTRACTORS: usize = 2;
const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

/// Source of option ordering for generated questions.
pub trait OptionShuffler {
    fn shuffle(&mut self, options: &mut [String]);
}

pub struct RngShuffler<R: Rng> {
    rng: R,
}

impl<R: Rng> RngShuffler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngShuffler<ThreadRng> {
    pub fn thread_local() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl<R: Rng> OptionShuffler for RngShuffler<R> {
    fn shuffle(&mut self, options: &mut [String]) {
        options.shuffle(&mut self.rng);
    }
}

/// Leaves options in generation order (correct answer first).
pub struct KeepOrder;

impl OptionShuffler for KeepOrder {
    fn shuffle(&mut self, _options: &mut [String]) {}
}

/// Builds up to four questions from a segment's opening sentences.
pub fn synthesize_quiz<S>(segment: &Segment, shuffler: &mut S) -> Vec<Question>
where
    S: OptionShuffler + ?Sized,
{
    let mut questions: Vec<Question> = segment
        .content
        .iter()
        .take(SENTENCES_PER_QUIZ)
        .filter(|sentence| !sentence.trim().is_empty())
        .filter_map(|sentence| sentence_question(sentence, &mut *shuffler))
        .collect();

    if segment.content.len() >= SENTENCES_PER_QUIZ {
        let answer = segment.base_title();
        questions.push(Question::multiple_choice(
            COMPREHENSION_PROMPT,
            fixed_options(answer, COMPREHENSION_DISTRACTORS),
            answer,
        ));
    }

    if questions.is_empty() && segment.has_content() {
        questions.push(Question::multiple_choice(
            FALLBACK_PROMPT,
            fixed_options(&segment.title, FALLBACK_DISTRACTORS),
            &segment.title,
        ));
    }

    questions.truncate(MAX_QUESTIONS_PER_SEGMENT);
    questions
}

pub fn synthesize_quiz_random(segment: &Segment) -> Vec<Question> {
    synthesize_quiz(segment, &mut RngShuffler::thread_local())
}

/// Sets `segment.quiz`; the only mutation a segment goes through after segmentation.
pub fn attach_quiz<S>(segment: &mut Segment, shuffler: &mut S)
where
    S: OptionShuffler + ?Sized,
{
    segment.quiz = synthesize_quiz(segment, shuffler);
}

fn sentence_question<S>(sentence: &str, shuffler: &mut S) -> Option<Question>
where
    S: OptionShuffler + ?Sized,
{
    let tokens: Vec<&str> = sentence.split_whitespace().collect();
    if tokens.len() < MIN_QUESTION_TOKENS {
        return None;
    }

    let important = important_words(&tokens);
    if let Some(key) = important.first() {
        return Some(fill_in_the_blank(sentence, key, &important, shuffler));
    }

    (tokens.len() >= MIN_TRUE_FALSE_TOKENS).then(|| Question::true_false(sentence))
}

/// Capitalised tokens longer than four characters, trailing punctuation removed.
fn important_words<'a>(tokens: &[&'a str]) -> Vec<&'a str> {
    tokens
        .iter()
        .copied()
        .filter(|token| token.chars().count() > 4)
        .filter(|token| token.chars().next().is_some_and(char::is_uppercase))
        .map(|token| token.trim_end_matches(TRAILING_PUNCTUATION))
        .filter(|word| !word.is_empty())
        .collect()
}

fn fill_in_the_blank<S>(sentence: &str, key: &str, important: &[&str], shuffler: &mut S) -> Question
where
    S: OptionShuffler + ?Sized,
{
    let blanked = sentence.replacen(key, BLANK_MARKER, 1);

    let mut options = vec![key.to_string()];
    for word in important.iter().filter(|w| **w != key) {
        if options.len() > SENTENCE_DISTRACTORS {
            break;
        }
        push_unique(&mut options, word);
    }

    let not_key = format!("Not {}", key);
    let padding = GENERIC_DISTRACTORS
        .iter()
        .copied()
        .chain(std::iter::once(not_key.as_str()))
        .chain(SPARE_DISTRACTORS.iter().copied());
    for candidate in padding {
        if options.len() > DISTRACTOR_COUNT {
            break;
        }
        push_unique(&mut options, candidate);
    }

    shuffler.shuffle(&mut options);
    Question::multiple_choice(format!("Fill in the blank: {}", blanked), options, key)
}

/// `answer` followed by the fixed distractors, swapping in spares on collision.
fn fixed_options(answer: &str, distractors: &[&str]) -> Vec<String> {
    let mut options = vec![answer.to_string()];
    for candidate in distractors.iter().chain(SPARE_DISTRACTORS.iter()) {
        if options.len() > DISTRACTOR_COUNT {
            break;
        }
        push_unique(&mut options, candidate);
    }
    options
}

fn push_unique(options: &mut Vec<String>, candidate: &str) {
    if !options.iter().any(|o| o == candidate) {
        options.push(candidate.to_string());
    }
}
