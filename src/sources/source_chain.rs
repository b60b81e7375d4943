use std::sync::Arc;

use futures::future;
use serde::Serialize;

use crate::config::Config;
use crate::errors::AppResult;
use crate::services::text_normalizer::normalize;
use crate::sources::comparison::{comparison_document, comparison_sides, MIN_COMPARISON_CHARS};
use crate::sources::{SourceProvider, SourceText, StudyGuideProvider};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GatheredSource {
    pub text: String,
    pub citations: Vec<String>,
}

impl GatheredSource {
    fn single(source: SourceText) -> Self {
        GatheredSource {
            text: source.text,
            citations: vec![source.citation],
        }
    }
}

/// Ordered list of providers consulted for a query, with a study-guide fallback.
pub struct SourceChain {
    providers: Vec<Arc<dyn SourceProvider>>,
    fallback: StudyGuideProvider,
    min_source_chars: usize,
    substantial_source_chars: usize,
}

impl SourceChain {
    pub fn new(providers: Vec<Arc<dyn SourceProvider>>, config: &Config) -> Self {
        Self {
            providers,
            fallback: StudyGuideProvider,
            min_source_chars: config.min_source_chars,
            substantial_source_chars: config.substantial_source_chars,
        }
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Collects text for `query`. Always returns something: the study guide
    /// stands in when no provider has usable text.
    pub async fn gather(&self, query: &str) -> GatheredSource {
        log::info!("Gathering sources for '{}'", query);

        if let Some(gathered) = self.gather_comparison(query).await {
            return gathered;
        }

        let mut texts = Vec::new();
        let mut citations = Vec::new();

        for provider in &self.providers {
            let source = match provider.fetch(query).await {
                Ok(Some(source)) => source,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("Source '{}' failed for '{}': {}", provider.name(), query, e);
                    continue;
                }
            };

            let text = normalize(&source.text);
            let length = text.chars().count();
            if length <= self.min_source_chars {
                log::debug!("Source '{}' returned only {} chars", provider.name(), length);
                continue;
            }

            log::info!("Source '{}' contributed {} chars", provider.name(), length);
            texts.push(text);
            citations.push(source.citation);
            if length > self.substantial_source_chars {
                break;
            }
        }

        if texts.is_empty() {
            log::warn!("No source had content for '{}', using study guide", query);
            return GatheredSource::single(self.fallback.guide_for(query));
        }

        GatheredSource {
            text: texts.join("\n\n"),
            citations,
        }
    }

    async fn gather_comparison(&self, query: &str) -> Option<GatheredSource> {
        let (left, right) = comparison_sides(query)?;
        let provider = self.providers.first()?;
        log::info!("Comparison query detected: '{}' vs '{}'", left, right);

        let (left_result, right_result) = future::join(provider.fetch(left), provider.fetch(right)).await;
        let fetched = |result: AppResult<Option<SourceText>>, side: &str| match result {
            Ok(source) => source.map(|s| SourceText::new(normalize(&s.text), s.citation)),
            Err(e) => {
                log::warn!("Comparison side '{}' failed: {}", side, e);
                None
            }
        };

        let left_source = fetched(left_result, left)?;
        let right_source = fetched(right_result, right)?;
        if left_source.text.is_empty() || right_source.text.is_empty() {
            return None;
        }

        let document = comparison_document(left, &left_source, right, &right_source);
        (document.text.chars().count() > MIN_COMPARISON_CHARS).then(|| GatheredSource::single(document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::sources::study_guide::STUDY_GUIDE_CITATION;
    use crate::sources::{MockSourceProvider, StaticTextProvider};

    fn long_text(label: &str, sentences: usize) -> String {
        (0..sentences)
            .map(|i| format!("{} fact number {} is worth remembering.", label, i))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn chain(providers: Vec<Arc<dyn SourceProvider>>) -> SourceChain {
        SourceChain::new(providers, &Config::test_config())
    }

    fn arc<P: SourceProvider + 'static>(provider: P) -> Arc<dyn SourceProvider> {
        Arc::new(provider)
    }

    #[tokio::test]
    async fn test_falls_back_to_study_guide_without_providers() {
        let gathered = chain(vec![]).gather("Photosynthesis").await;

        assert_eq!(gathered.citations, vec![STUDY_GUIDE_CITATION]);
        assert!(gathered.text.contains("Photosynthesis"));
    }

    #[tokio::test]
    async fn test_stops_after_substantial_source() {
        let first = StaticTextProvider::new().with_document("rust", long_text("Rust", 20), "Primary");
        let mut second = MockSourceProvider::new();
        second.expect_name().return_const("never");
        second.expect_fetch().never();

        let gathered = chain(vec![arc(first), arc(second)]).gather("Rust").await;

        assert_eq!(gathered.citations, vec!["Primary"]);
    }

    #[tokio::test]
    async fn test_collects_short_sources_until_one_is_substantial() {
        let first = StaticTextProvider::new().with_document("rust", long_text("A", 4), "First");
        let second = StaticTextProvider::new().with_document("rust", long_text("B", 20), "Second");

        let gathered = chain(vec![arc(first), arc(second)]).gather("rust").await;

        assert_eq!(gathered.citations, vec!["First", "Second"]);
        assert!(gathered.text.contains("\n\n"));
    }

    #[tokio::test]
    async fn test_skips_failing_and_tiny_sources() {
        let mut failing = MockSourceProvider::new();
        failing.expect_name().return_const("failing");
        failing
            .expect_fetch()
            .returning(|_| Err(AppError::SourceError("timeout".to_string())));
        let tiny = StaticTextProvider::new().with_document("rust", "Too small.", "Tiny");
        let good = StaticTextProvider::new().with_document("rust", long_text("Rust", 20), "Good");

        let gathered = chain(vec![arc(failing), arc(tiny), arc(good)])
            .gather("rust")
            .await;

        assert_eq!(gathered.citations, vec!["Good"]);
    }

    #[tokio::test]
    async fn test_sources_are_normalized() {
        let raw = format!("== Intro ==\n{} [1]", long_text("Rust", 20));
        let provider = StaticTextProvider::new().with_document("rust", raw, "Wiki");

        let gathered = chain(vec![arc(provider)]).gather("rust").await;

        assert!(!gathered.text.contains("[1]"));
        assert!(!gathered.text.contains("=="));
    }

    #[tokio::test]
    async fn test_comparison_query_builds_side_by_side_document() {
        let provider = StaticTextProvider::new()
            .with_document("docker", long_text("Docker", 6), "Wiki Docker")
            .with_document("podman", long_text("Podman", 6), "Wiki Podman");

        let gathered = chain(vec![arc(provider)]).gather("Docker vs Podman").await;

        assert_eq!(gathered.citations, vec!["Comparison: Wiki Docker & Wiki Podman"]);
        assert!(gathered.text.contains("=== DOCKER ==="));
        assert!(gathered.text.contains("=== PODMAN ==="));
    }

    #[tokio::test]
    async fn test_comparison_with_missing_side_uses_regular_path() {
        let provider = StaticTextProvider::new()
            .with_document("docker", long_text("Docker", 6), "Wiki Docker")
            .with_document("docker vs podman", long_text("Both", 20), "Combined");

        let gathered = chain(vec![arc(provider)]).gather("Docker vs Podman").await;

        assert_eq!(gathered.citations, vec!["Combined"]);
    }
}
