use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    models::domain::QuestionHistory,
    repositories::player_file_name,
};

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Missing or unreadable history loads as empty; history is advisory
    /// state and never blocks a game from starting.
    async fn load(&self, player: &str) -> AppResult<QuestionHistory>;
    async fn save(&self, player: &str, history: &QuestionHistory) -> AppResult<()>;
}

/// One JSON blob per player under the configured data directory.
pub struct JsonFileHistoryRepository {
    data_dir: PathBuf,
}

impl JsonFileHistoryRepository {
    pub fn new(data_dir: &str) -> Self {
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }

    fn path_for(&self, player: &str) -> PathBuf {
        self.data_dir
            .join(format!("history-{}.json", player_file_name(player)))
    }
}

#[async_trait]
impl HistoryRepository for JsonFileHistoryRepository {
    async fn load(&self, player: &str) -> AppResult<QuestionHistory> {
        match tokio::fs::read(self.path_for(player)).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(history) => Ok(history),
                Err(err) => {
                    log::warn!(
                        "Corrupt history blob for player '{}', starting fresh: {}",
                        player,
                        err
                    );
                    Ok(QuestionHistory::default())
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(QuestionHistory::default()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, player: &str, history: &QuestionHistory) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let bytes = serde_json::to_vec(history)
            .map_err(|err| AppError::InternalError(format!("History serialization: {}", err)))?;
        tokio::fs::write(self.path_for(player), bytes).await?;
        Ok(())
    }
}
