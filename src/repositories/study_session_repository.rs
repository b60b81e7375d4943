use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    errors::{AppError, AppResult},
    models::domain::StudyMaterial,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudySessionRepository: Send + Sync {
    async fn save_session(&self, material: StudyMaterial) -> AppResult<StudyMaterial>;
}

#[derive(Clone, Default)]
pub struct InMemoryStudySessionRepository {
    sessions: Arc<RwLock<HashMap<String, StudyMaterial>>>,
}

impl InMemoryStudySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn find_by_id(&self, session_id: &str) -> Option<StudyMaterial> {
        self.sessions.read().await.get(session_id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl StudySessionRepository for InMemoryStudySessionRepository {
    async fn save_session(&self, mut material: StudyMaterial) -> AppResult<StudyMaterial> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&material.session_id) {
            return Err(AppError::RepositoryError(format!(
                "Study session '{}' already exists",
                material.session_id
            )));
        }

        material.created_at.get_or_insert_with(Utc::now);
        sessions.insert(material.session_id.clone(), material.clone());
        log::info!(
            "Saved study session {} for '{}' ({} segments)",
            material.session_id,
            material.topic,
            material.segments.len()
        );
        Ok(material)
    }
}
