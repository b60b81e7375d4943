use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use validator::Validate;

use crate::{
    config::Config,
    errors::AppResult,
    models::{domain::StudyMaterial, dto::request::GenerateStudyRequest},
    repositories::StudySessionRepository,
    services::{
        quiz_synthesizer::{attach_quiz, OptionShuffler, RngShuffler},
        segmenter::segment,
        text_normalizer::normalize,
        topic_suggestions::suggest_related_topics,
    },
    sources::SourceChain,
};

pub const UPLOADED_SOURCE: &str = "Your uploaded files";
pub const NOTES_SOURCE: &str = "Your notes";

pub struct LearningService {
    repository: Arc<dyn StudySessionRepository>,
    sources: Arc<SourceChain>,
    config: Arc<Config>,
}

impl LearningService {
    pub fn new(
        repository: Arc<dyn StudySessionRepository>,
        sources: Arc<SourceChain>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            repository,
            sources,
            config,
        }
    }

    pub async fn generate(&self, request: GenerateStudyRequest) -> AppResult<StudyMaterial> {
        let mut shuffler = RngShuffler::new(StdRng::from_entropy());
        self.generate_with(request, &mut shuffler).await
    }

    /// Same as [`generate`](Self::generate) with a caller-supplied option shuffler.
    pub async fn generate_with<S>(&self, request: GenerateStudyRequest, shuffler: &mut S) -> AppResult<StudyMaterial>
    where
        S: OptionShuffler + Send + ?Sized,
    {
        request.validate()?;
        let topic = request.query.trim();
        log::info!("Generating study material for '{}'", topic);

        let (text, sources) = self.resolve_text(&request).await;
        let segmentation = segment(&text, topic);
        let insufficient_material = segmentation.is_placeholder();
        if insufficient_material {
            log::warn!("Insufficient source material for '{}'", topic);
        }

        let mut segments = segmentation.into_segments();
        let quiz_enabled = request
            .quiz_enabled
            .unwrap_or(self.config.quiz_enabled_by_default);
        if quiz_enabled {
            for segment in &mut segments {
                attach_quiz(segment, &mut *shuffler);
            }
        }

        let mut material = StudyMaterial::new(topic, segments, sources);
        material.suggestions = suggest_related_topics(topic);
        material.quiz_enabled = quiz_enabled;
        material.insufficient_material = insufficient_material;

        let saved = self.repository.save_session(material).await?;
        log::info!(
            "Study session {} ready: {} segments, {} questions",
            saved.session_id,
            saved.segments.len(),
            saved.question_count()
        );
        Ok(saved)
    }

    /// Uploaded text first, then the user's notes, then the source chain.
    async fn resolve_text(&self, request: &GenerateStudyRequest) -> (String, Vec<String>) {
        let min_chars = self.config.min_user_text_chars;
        let usable = |text: &Option<String>| {
            text.as_deref()
                .filter(|t| t.trim().chars().count() > min_chars)
                .map(str::to_string)
        };

        if let Some(uploaded) = usable(&request.uploaded_text) {
            log::info!("Using uploaded text");
            return (normalize(&uploaded), vec![UPLOADED_SOURCE.to_string()]);
        }
        if let Some(notes) = usable(&request.user_notes) {
            log::info!("Using user notes");
            return (notes, vec![NOTES_SOURCE.to_string()]);
        }

        let gathered = self.sources.gather(request.query.trim()).await;
        (gathered.text, gathered.citations)
    }
}
