pub mod history;
pub mod question;
pub mod session;
pub use history::QuestionHistory;
pub use question::{AgeBand, TriviaQuestion};
pub use session::{score_message, GameSession, SessionProgress};
