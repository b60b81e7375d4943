use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::sources::{SourceProvider, SourceText};

/// Serves preloaded documents keyed by case-insensitive query.
#[derive(Clone, Debug, Default)]
pub struct StaticTextProvider {
    documents: HashMap<String, SourceText>,
}

impl StaticTextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, query: &str, text: impl Into<String>, citation: impl Into<String>) -> Self {
        self.documents
            .insert(query.trim().to_lowercase(), SourceText::new(text, citation));
        self
    }
}

#[async_trait]
impl SourceProvider for StaticTextProvider {
    fn name(&self) -> &'static str {
        "static_text"
    }

    async fn fetch(&self, query: &str) -> AppResult<Option<SourceText>> {
        Ok(self.documents.get(&query.trim().to_lowercase()).cloned())
    }
}
