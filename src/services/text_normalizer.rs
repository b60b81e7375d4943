use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static WIKI_HEADING_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"={2,}[^=]*={2,}").expect("WIKI_HEADING_REGEX is a valid regex pattern")
});
static CITATION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.*?\]").expect("CITATION_REGEX is a valid regex pattern"));
static EXCESS_NEWLINES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{3,}").expect("EXCESS_NEWLINES_REGEX is a valid regex pattern"));
static EXCESS_SPACES_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r" {2,}").expect("EXCESS_SPACES_REGEX is a valid regex pattern"));
static NON_PRINTABLE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\x20-\x7E\n\r\t]").expect("NON_PRINTABLE_REGEX is a valid regex pattern")
});

/// Strips markup and noise from raw source text.
///
/// Rules run in a fixed order; the whole pass repeats until the text stops
/// changing, which makes `normalize(normalize(x)) == normalize(x)` hold even
/// when a later rule exposes a pattern an earlier one would have caught.
/// Every effective pass shortens the text, so the loop terminates.
pub fn normalize(text: &str) -> String {
    let mut current = normalize_pass(text);
    loop {
        let next = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_pass(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = WIKI_HEADING_REGEX.replace_all(text, "");
    let text = replace_cow(text, &CITATION_REGEX, "");
    let text = replace_cow(text, &EXCESS_NEWLINES_REGEX, "\n\n");
    let text = replace_cow(text, &EXCESS_SPACES_REGEX, " ");
    let text = replace_cow(text, &NON_PRINTABLE_REGEX, "");

    text.trim().to_string()
}

fn replace_cow<'a>(text: Cow<'a, str>, regex: &Regex, replacement: &str) -> Cow<'a, str> {
    let replaced = match regex.replace_all(&text, replacement) {
        Cow::Borrowed(_) => None,
        Cow::Owned(replaced) => Some(replaced),
    };
    replaced.map_or(text, Cow::Owned)
}
