use once_cell::sync::Lazy;
use regex::Regex;

use crate::sources::SourceText;

pub const MAX_SIDE_CHARS: usize = 2000;
pub const MIN_COMPARISON_CHARS: usize = 200;

static VERSUS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\s+vs\.?\s+|\s+versus\s+").expect("VERSUS_REGEX is a valid regex pattern")
});

/// Splits `"X vs Y"`, `"X vs. Y"` or `"X versus Y"` into its two sides.
pub fn comparison_sides(query: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = VERSUS_REGEX.split(query.trim()).map(str::trim).collect();
    match parts.as_slice() {
        [left, right] if !left.is_empty() && !right.is_empty() => Some((*left, *right)),
        _ => None,
    }
}

/// Side-by-side document for two fetched topics. Headings use `===` markers,
/// so the result must not go through the normalizer.
pub fn comparison_document(left: &str, left_source: &SourceText, right: &str, right_source: &SourceText) -> SourceText {
    let mut text = format!("COMPARISON: {} vs {}\n\n", left, right);
    text.push_str(&format!(
        "=== {} ===\n{}\n\n",
        left.to_uppercase(),
        capped(&left_source.text)
    ));
    text.push_str(&format!(
        "=== {} ===\n{}\n\n",
        right.to_uppercase(),
        capped(&right_source.text)
    ));
    text.push_str("KEY DIFFERENCES:\n");
    text.push_str(&format!(
        "While {l} and {r} are related concepts, they have distinct characteristics. \
         {l} focuses on specific aspects, while {r} encompasses broader principles.",
        l = left,
        r = right
    ));

    SourceText::new(
        text,
        format!("Comparison: {} & {}", left_source.citation, right_source.citation),
    )
}

fn capped(text: &str) -> String {
    text.chars().take(MAX_SIDE_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_comparison_forms() {
        assert_eq!(comparison_sides("Docker vs Podman"), Some(("Docker", "Podman")));
        assert_eq!(comparison_sides("TCP VS. UDP"), Some(("TCP", "UDP")));
        assert_eq!(comparison_sides("cats versus dogs"), Some(("cats", "dogs")));
    }

    #[test]
    fn test_rejects_non_comparisons() {
        assert_eq!(comparison_sides("Kubernetes"), None);
        assert_eq!(comparison_sides("a vs b vs c"), None);
        assert_eq!(comparison_sides("canvas basics"), None);
    }

    #[test]
    fn test_document_caps_each_side_and_merges_citations() {
        let left = SourceText::new("x".repeat(3000), "Wiki A");
        let right = SourceText::new("Short text on the right.", "Wiki B");

        let doc = comparison_document("Left", &left, "Right", &right);

        assert!(doc.text.starts_with("COMPARISON: Left vs Right"));
        assert!(doc.text.contains("=== LEFT ===\n"));
        assert!(doc.text.contains("=== RIGHT ===\nShort text on the right."));
        assert!(!doc.text.contains(&"x".repeat(MAX_SIDE_CHARS + 1)));
        assert!(doc.text.contains("KEY DIFFERENCES:"));
        assert_eq!(doc.citation, "Comparison: Wiki A & Wiki B");
    }
}
