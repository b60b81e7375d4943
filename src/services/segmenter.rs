use crate::models::domain::Segment;
use crate::services::sentence_extractor::extract_sentences;

pub const SEGMENT_SIZE: usize = 5;
pub const SEGMENT_LOOKAHEAD: usize = 2;
pub const KEY_POINT_COUNT: usize = 5;
pub const MIN_SEGMENTABLE_CHARS: usize = 20;
pub const MIN_FALLBACK_LINE_CHARS: usize = 20;
pub const MAX_FALLBACK_CHARS: usize = 500;

/// How a piece of text was turned into segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segmentation {
    /// Built from extracted sentences.
    Sentences(Vec<Segment>),
    /// No sentence survived extraction; paragraphs or long lines were used instead.
    Recovered(Vec<Segment>),
    /// Not enough source material; the segment holds synthetic content.
    Placeholder(Segment),
}

impl Segmentation {
    pub fn segments(&self) -> &[Segment] {
        match self {
            Segmentation::Sentences(segments) | Segmentation::Recovered(segments) => segments,
            Segmentation::Placeholder(segment) => std::slice::from_ref(segment),
        }
    }

    pub fn into_segments(self) -> Vec<Segment> {
        match self {
            Segmentation::Sentences(segments) | Segmentation::Recovered(segments) => segments,
            Segmentation::Placeholder(segment) => vec![segment],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Segmentation::Placeholder(_))
    }
}

/// Splits `text` into titled learning segments for `topic`. Deterministic.
pub fn segment(text: &str, topic: &str) -> Segmentation {
    let trimmed = text.trim();
    if trimmed.chars().count() < MIN_SEGMENTABLE_CHARS {
        let content = if trimmed.is_empty() {
            format!("Learning about {}", topic)
        } else {
            trimmed.to_string()
        };
        return Segmentation::Placeholder(Segment::new(
            topic,
            vec![content],
            vec![format!("Understanding {}", topic)],
        ));
    }

    let sentences: Vec<String> = extract_sentences(text).collect();
    match sentences.len() {
        0 => recover_without_sentences(text, topic),
        1 | 2 => Segmentation::Sentences(vec![Segment::new(
            topic,
            sentences.clone(),
            sentences,
        )]),
        _ => Segmentation::Sentences(windowed_segments(&sentences, topic)),
    }
}

/// Windows of `SEGMENT_SIZE + SEGMENT_LOOKAHEAD` sentences advancing by
/// `SEGMENT_SIZE`, so neighbouring parts share their transition sentences.
fn windowed_segments(sentences: &[String], topic: &str) -> Vec<Segment> {
    (0..sentences.len())
        .step_by(SEGMENT_SIZE)
        .enumerate()
        .map(|(n, start)| {
            let end = (start + SEGMENT_SIZE + SEGMENT_LOOKAHEAD).min(sentences.len());
            let batch = sentences[start..end].to_vec();
            let key_points = batch.iter().take(KEY_POINT_COUNT).cloned().collect();
            Segment::new(format!("{} - Part {}", topic, n + 1), batch, key_points)
        })
        .collect()
}

fn recover_without_sentences(text: &str, topic: &str) -> Segmentation {
    log::debug!("No sentences extracted for '{}', recovering from paragraphs", topic);

    let mut pieces: Vec<String> = text
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    if pieces.is_empty() {
        pieces = text
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() > MIN_FALLBACK_LINE_CHARS)
            .map(str::to_string)
            .collect();
    }

    if pieces.is_empty() {
        let truncated: String = text.trim().chars().take(MAX_FALLBACK_CHARS).collect();
        return Segmentation::Placeholder(Segment::new(
            topic,
            vec![truncated],
            vec![format!("Key concepts about {}", topic)],
        ));
    }

    let key_points = pieces.iter().take(KEY_POINT_COUNT).cloned().collect();
    Segmentation::Recovered(vec![Segment::new(topic, pieces, key_points)])
}
