use std::sync::Arc;

use crate::{
    constants::question_banks,
    errors::{AppError, AppResult},
    models::domain::{score_message, AgeBand, GameSession, SessionProgress},
    repositories::{HistoryRepository, ProgressRepository},
    sampling,
    services::question_service::QuestionService,
};

/// Result of recording one answer.
#[derive(Debug, Clone)]
pub enum AnswerOutcome {
    InProgress(SessionProgress),
    Finished {
        score: u32,
        total: usize,
        message: String,
    },
}

/// Drives the question, hint, answer, feedback progression that used to
/// live in the browser: starts sessions with history-aware sampling, records
/// answers, and persists progress through the injected stores. Per-player
/// state is read-modify-write with no cross-request guard; a restart mid-game
/// simply overwrites (last write wins).
pub struct SessionService {
    question_service: Arc<QuestionService>,
    history_repository: Arc<dyn HistoryRepository>,
    progress_repository: Arc<dyn ProgressRepository>,
    history_depth: usize,
}

impl SessionService {
    pub fn new(
        question_service: Arc<QuestionService>,
        history_repository: Arc<dyn HistoryRepository>,
        progress_repository: Arc<dyn ProgressRepository>,
        history_depth: usize,
    ) -> Self {
        Self {
            question_service,
            history_repository,
            progress_repository,
            history_depth,
        }
    }

    pub async fn start_session(
        &self,
        player: &str,
        count: usize,
        age_band: AgeBand,
    ) -> AppResult<GameSession> {
        let mut history = self.history_repository.load(player).await?;
        let set = self.question_service.fetch_pool(count, age_band).await;

        let mut sampled = {
            let mut rng = rand::thread_rng();
            sampling::sample_unique(&set.questions, &history, count, &mut rng)
        };
        if sampled.is_empty() {
            sampled = vec![question_banks::placeholder_question()];
        }

        let texts = sampled.iter().map(|q| q.question.clone()).collect();
        history.record(texts, self.history_depth);
        self.history_repository.save(player, &history).await?;

        let session = GameSession::new(player, age_band, sampled);
        self.progress_repository
            .save(player, &SessionProgress::from(&session))
            .await?;

        log::info!(
            "Started session {} for player '{}' with {} questions ({})",
            session.id,
            player,
            session.questions.len(),
            set.source.as_str()
        );
        Ok(session)
    }

    pub async fn record_answer(&self, player: &str, knew: bool) -> AppResult<AnswerOutcome> {
        let progress = self
            .progress_repository
            .load(player)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No active session for player '{}'", player))
            })?;

        let mut session = progress.into_session(player);
        if session.is_complete() {
            return Err(AppError::ValidationError(
                "Session is already complete".to_string(),
            ));
        }

        if session.record_answer(knew) {
            self.progress_repository.clear(player).await?;
            let total = session.questions.len();
            Ok(AnswerOutcome::Finished {
                score: session.score,
                total,
                message: score_message(session.score, total).to_string(),
            })
        } else {
            let progress = SessionProgress::from(&session);
            self.progress_repository.save(player, &progress).await?;
            Ok(AnswerOutcome::InProgress(progress))
        }
    }

    pub async fn saved_progress(&self, player: &str) -> AppResult<Option<SessionProgress>> {
        self.progress_repository.load(player).await
    }
}
