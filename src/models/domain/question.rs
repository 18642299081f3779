use serde::{Deserialize, Serialize};

/// A single trivia entry. The question text doubles as the identity of the
/// entry: there is no stable id, so de-duplication and history tracking key
/// on the text itself.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TriviaQuestion {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub hint: String,
}

impl TriviaQuestion {
    pub fn new(question: &str, answer: &str, hint: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
            hint: hint.to_string(),
        }
    }

    /// An entry without a question or an answer is unusable; a missing hint
    /// is fine.
    pub fn is_usable(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}

/// Coarse difficulty tier. Controls prompt phrasing and which fallback bank
/// is used when the model is unavailable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBand {
    Young,
    Middle,
    Older,
}

impl Default for AgeBand {
    fn default() -> Self {
        AgeBand::Middle
    }
}

impl AgeBand {
    /// Lenient query-parameter parsing: accepts the band names and the age
    /// ranges the front end sends. Anything unrecognised falls back to the
    /// middle band rather than failing the request.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "young" | "5-7" | "5" | "6" | "7" => AgeBand::Young,
            "middle" | "8-10" | "8" | "9" | "10" => AgeBand::Middle,
            "older" | "11-13" | "11" | "12" | "13" => AgeBand::Older,
            _ => AgeBand::Middle,
        }
    }

    /// Age range used in prompt phrasing.
    pub fn age_range(&self) -> &'static str {
        match self {
            AgeBand::Young => "5-7",
            AgeBand::Middle => "8-10",
            AgeBand::Older => "11-13",
        }
    }
}
