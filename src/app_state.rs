use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{
        InMemoryScheduleRepository, InMemoryStudySessionRepository, ScheduleRepository,
        StudySessionRepository,
    },
    services::{learning_service::LearningService, schedule_service::ScheduleService},
    sources::{SourceChain, SourceProvider},
};

#[derive(Clone)]
pub struct AppState {
    pub learning_service: Arc<LearningService>,
    pub schedule_service: Arc<ScheduleService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        config: Config,
        providers: Vec<Arc<dyn SourceProvider>>,
        session_repository: Arc<dyn StudySessionRepository>,
        schedule_repository: Arc<dyn ScheduleRepository>,
    ) -> Self {
        let config = Arc::new(config);

        let source_chain = Arc::new(SourceChain::new(providers, &config));
        log::info!("Source chain: {:?}", source_chain.provider_names());

        let learning_service = Arc::new(LearningService::new(
            session_repository,
            source_chain,
            config.clone(),
        ));
        let schedule_service = Arc::new(ScheduleService::new(schedule_repository, config.clone()));

        Self {
            learning_service,
            schedule_service,
            config,
        }
    }

    /// State backed by in-memory stores, used by the CLI.
    pub fn in_memory(config: Config, providers: Vec<Arc<dyn SourceProvider>>) -> Self {
        Self::new(
            config,
            providers,
            Arc::new(InMemoryStudySessionRepository::new()),
            Arc::new(InMemoryScheduleRepository::new()),
        )
    }
}
