use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    models::domain::SessionProgress,
    repositories::player_file_name,
};

#[async_trait]
pub trait ProgressRepository: Send + Sync {
    async fn load(&self, player: &str) -> AppResult<Option<SessionProgress>>;
    async fn save(&self, player: &str, progress: &SessionProgress) -> AppResult<()>;
    async fn clear(&self, player: &str) -> AppResult<()>;
}

/// Saved progress as one JSON blob per player, overwritten on every answer.
/// Last write wins; a restart mid-game simply replaces the blob.
pub struct JsonFileProgressRepository {
    data_dir: PathBuf,
}

impl JsonFileProgressRepository {
    pub fn new(data_dir: &str) -> Self {
        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }

    fn path_for(&self, player: &str) -> PathBuf {
        self.data_dir
            .join(format!("progress-{}.json", player_file_name(player)))
    }
}

#[async_trait]
impl ProgressRepository for JsonFileProgressRepository {
    async fn load(&self, player: &str) -> AppResult<Option<SessionProgress>> {
        match tokio::fs::read(self.path_for(player)).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(progress) => Ok(Some(progress)),
                Err(err) => {
                    log::warn!(
                        "Corrupt progress blob for player '{}', discarding: {}",
                        player,
                        err
                    );
                    Ok(None)
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, player: &str, progress: &SessionProgress) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.data_dir).await?;
        let bytes = serde_json::to_vec(progress)
            .map_err(|err| AppError::InternalError(format!("Progress serialization: {}", err)))?;
        tokio::fs::write(self.path_for(player), bytes).await?;
        Ok(())
    }

    async fn clear(&self, player: &str) -> AppResult<()> {
        match tokio::fs::remove_file(self.path_for(player)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
