use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    repositories::{JsonFileHistoryRepository, JsonFileProgressRepository},
    services::{
        model_service::{GeminiProvider, QuestionProvider},
        question_service::QuestionService,
        session_service::SessionService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_service: Arc<QuestionService>,
    pub session_service: Arc<SessionService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let provider = Arc::new(GeminiProvider::new(&config)?);
        Self::with_provider(config, provider).await
    }

    /// Wiring with an injected provider, used by tests to stay offline.
    pub async fn with_provider(
        config: Config,
        provider: Arc<dyn QuestionProvider>,
    ) -> AppResult<Self> {
        tokio::fs::create_dir_all(&config.data_dir).await?;

        let history_repository = Arc::new(JsonFileHistoryRepository::new(&config.data_dir));
        let progress_repository = Arc::new(JsonFileProgressRepository::new(&config.data_dir));

        let question_service = Arc::new(QuestionService::new(provider));
        let session_service = Arc::new(SessionService::new(
            Arc::clone(&question_service),
            history_repository,
            progress_repository,
            config.history_depth,
        ));

        Ok(Self {
            question_service,
            session_service,
            config: Arc::new(config),
        })
    }
}
