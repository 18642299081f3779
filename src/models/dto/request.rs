use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct QuestionsQuery {
    #[validate(range(min = 1, max = 50))]
    pub count: Option<usize>,

    /// Lenient: band name or age range; unrecognised values fall back to the
    /// middle band.
    pub age_band: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct StartSessionRequest {
    #[validate(length(min = 1, max = 50))]
    pub player: String,

    #[validate(range(min = 1, max = 50))]
    pub count: Option<usize>,

    pub age_band: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AnswerRequest {
    #[validate(length(min = 1, max = 50))]
    pub player: String,

    /// Whether the player knew the answer before it was revealed.
    pub knew: bool,
}
