pub const MIN_SENTENCE_WORDS: usize = 3;
pub const MAX_SENTENCE_WORDS: usize = 100;

const TERMINATORS: &[char] = &['.', '!', '?'];
const CLOSERS: &[char] = &['"', '\'', ')', ']', '\u{201d}', '\u{2019}'];
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "co", "corp", "approx", "dept", "cf", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "u.s", "u.k",
];
/// Abbreviations only when a number follows, as in `No. 5` or `Fig. 2`.
const NUMBERED_ABBREVIATIONS: &[&str] = &["no", "fig", "vol"];

/// Candidate sentence slices found by punctuation-based boundary detection.
///
/// A boundary is a run of `.`, `!` or `?` (optionally followed by closing
/// quotes or brackets) that is followed by whitespace or the end of text.
/// Periods after known abbreviations or single-letter initials, and periods
/// followed by a lowercase word, are not boundaries.
#[derive(Clone, Debug)]
pub struct SentenceBounds<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> SentenceBounds<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, cursor: 0 }
    }

    fn next_boundary(&self) -> Option<usize> {
        let rest = &self.text[self.cursor..];
        let mut chars = rest.char_indices().peekable();

        while let Some((idx, ch)) = chars.next() {
            if !TERMINATORS.contains(&ch) {
                continue;
            }

            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if TERMINATORS.contains(&next) || CLOSERS.contains(&next) {
                    end = next_idx + next.len_utf8();
                    chars.next();
                } else {
                    break;
                }
            }

            let after = &rest[end..];
            match after.chars().next() {
                None => return Some(self.cursor + end),
                Some(c) if !c.is_whitespace() => continue,
                Some(_) => {}
            }

            if ch == '.' && is_abbreviation(&rest[..idx], after) {
                continue;
            }
            if starts_lowercase(after) {
                continue;
            }

            return Some(self.cursor + end);
        }

        None
    }
}

impl<'a> Iterator for SentenceBounds<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.text.len() {
            let end = self.next_boundary().unwrap_or(self.text.len());
            let candidate = self.text[self.cursor..end].trim();
            self.cursor = end;
            if !candidate.is_empty() {
                return Some(candidate);
            }
        }
        None
    }
}

fn is_abbreviation(before_period: &str, after: &str) -> bool {
    let mut words = before_period.rsplit(char::is_whitespace);
    let word = words
        .next()
        .unwrap_or("")
        .trim_start_matches(|c: char| !c.is_alphanumeric());

    if word.is_empty() {
        return false;
    }
    let mut chars = word.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        if first.is_alphabetic() {
            return true;
        }
    }

    let lowered = word.to_lowercase();
    if NUMBERED_ABBREVIATIONS.contains(&lowered.as_str()) {
        return after.trim_start().starts_with(|c: char| c.is_ascii_digit());
    }
    if lowered == "al" {
        return words.next().is_some_and(|prev| prev.eq_ignore_ascii_case("et"));
    }
    ABBREVIATIONS.contains(&lowered.as_str())
}

fn starts_lowercase(after: &str) -> bool {
    after
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_lowercase())
}

/// Lazy, restartable sequence of well-formed sentences. Clone it (or call
/// [`extract_sentences`] again) to iterate from the start.
#[derive(Clone, Debug)]
pub struct Sentences<'a> {
    bounds: SentenceBounds<'a>,
    pending: std::vec::IntoIter<String>,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(sentence) = self.pending.next() {
                return Some(sentence);
            }

            let candidate = self.bounds.next()?;
            if word_count(candidate) > MAX_SENTENCE_WORDS {
                // boundaries were missed; fall back to literal periods
                self.pending = split_on_periods(candidate)
                    .filter_map(|piece| finish_sentence(&piece))
                    .collect::<Vec<_>>()
                    .into_iter();
                continue;
            }

            if let Some(sentence) = finish_sentence(candidate) {
                return Some(sentence);
            }
        }
    }
}

pub fn extract_sentences(text: &str) -> Sentences<'_> {
    Sentences {
        bounds: SentenceBounds::new(text),
        pending: Vec::new().into_iter(),
    }
}

fn split_on_periods(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{}.", s))
}

/// Terminates the sentence if needed and applies the word-count window.
fn finish_sentence(candidate: &str) -> Option<String> {
    let trimmed = candidate.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut sentence = trimmed.to_string();
    if !sentence.trim_end_matches(CLOSERS).ends_with(TERMINATORS) {
        sentence.push('.');
    }

    let words = word_count(&sentence);
    (MIN_SENTENCE_WORDS..=MAX_SENTENCE_WORDS)
        .contains(&words)
        .then_some(sentence)
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
