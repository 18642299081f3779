use serde::Serialize;

use crate::models::domain::TriviaQuestion;

/// Wire shape of `GET /api/questions`: the question array plus provenance
/// metadata, so the front end can tell live questions from bank fallbacks.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<TriviaQuestion>,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnswerResponse {
    InProgress {
        score: u32,
        current_index: usize,
        total: usize,
    },
    Finished {
        score: u32,
        total: usize,
        message: String,
    },
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_response_is_tagged() {
        let finished = AnswerResponse::Finished {
            score: 18,
            total: 20,
            message: "מצוין! אתה ממש חכם!".to_string(),
        };
        let json = serde_json::to_value(&finished).unwrap();
        assert_eq!(json["status"], "finished");
        assert_eq!(json["score"], 18);

        let in_progress = AnswerResponse::InProgress {
            score: 1,
            current_index: 2,
            total: 20,
        };
        let json = serde_json::to_value(&in_progress).unwrap();
        assert_eq!(json["status"], "in_progress");
    }

    #[test]
    fn test_questions_response_skips_missing_model() {
        let response = QuestionsResponse {
            questions: vec![],
            source: "fallback".to_string(),
            model: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("model").is_none());
    }
}
