pub mod comparison;
pub mod source_chain;
pub mod static_text;
pub mod study_guide;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppResult;

pub use source_chain::{GatheredSource, SourceChain};
pub use static_text::StaticTextProvider;
pub use study_guide::StudyGuideProvider;

/// Raw text for a query plus a human-readable attribution.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceText {
    pub text: String,
    pub citation: String,
}

impl SourceText {
    pub fn new(text: impl Into<String>, citation: impl Into<String>) -> Self {
        SourceText {
            text: text.into(),
            citation: citation.into(),
        }
    }
}

/// A place study text can be fetched from. `Ok(None)` means "nothing for this query".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SourceProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn fetch(&self, query: &str) -> AppResult<Option<SourceText>>;
}
