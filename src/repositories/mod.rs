pub mod history_repository;
pub mod progress_repository;

pub use history_repository::{HistoryRepository, JsonFileHistoryRepository};
pub use progress_repository::{JsonFileProgressRepository, ProgressRepository};

/// Player names come straight from the client and may contain Hebrew or
/// anything else; keep alphanumerics (any script) and fold the rest so the
/// name is safe as a file name component.
pub(crate) fn player_file_name(player: &str) -> String {
    player
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect()
}
