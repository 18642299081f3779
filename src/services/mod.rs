pub mod model_service;
pub mod question_service;
pub mod session_service;

pub use model_service::{GeminiProvider, QuestionProvider};
pub use question_service::{QuestionService, QuestionSet, QuestionSource};
pub use session_service::{AnswerOutcome, SessionService};
