pub mod question_handler;
pub mod session_handler;

pub use question_handler::{get_questions, health_check};
pub use session_handler::{get_progress, record_answer, start_session};
