use std::sync::Arc;

use serde::Serialize;

use crate::{
    constants::question_banks,
    models::domain::{AgeBand, QuestionHistory, TriviaQuestion},
    repair, sampling,
    services::model_service::QuestionProvider,
};

/// Where a question set came from, reported to the front end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSource {
    Model,
    Fallback,
}

impl QuestionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionSource::Model => "model",
            QuestionSource::Fallback => "fallback",
        }
    }
}

#[derive(Clone, Debug)]
pub struct QuestionSet {
    pub questions: Vec<TriviaQuestion>,
    pub source: QuestionSource,
    pub model: Option<String>,
}

/// Orchestrates question acquisition: live model output first, repaired;
/// the static bank for the age band on any failure; the placeholder question
/// as the very last tier. Provider errors are swallowed and logged, never
/// surfaced to callers.
pub struct QuestionService {
    provider: Arc<dyn QuestionProvider>,
}

impl QuestionService {
    pub fn new(provider: Arc<dyn QuestionProvider>) -> Self {
        Self { provider }
    }

    /// Full candidate pool for sampling: the repaired model output, or the
    /// whole fallback bank. Never empty.
    pub async fn fetch_pool(&self, count: usize, age_band: AgeBand) -> QuestionSet {
        match self.provider.fetch_raw(count, age_band).await {
            Ok(raw) => {
                let questions = repair::repair_questions(&raw.text);
                if questions.is_empty() {
                    log::warn!(
                        "Output from model '{}' yielded no usable questions, using fallback bank",
                        raw.model
                    );
                    Self::fallback_pool(age_band)
                } else {
                    QuestionSet {
                        questions,
                        source: QuestionSource::Model,
                        model: Some(raw.model),
                    }
                }
            }
            Err(err) => {
                log::warn!("Question provider unavailable, using fallback bank: {}", err);
                Self::fallback_pool(age_band)
            }
        }
    }

    /// `count` distinct questions with no history filtering, for the plain
    /// questions endpoint.
    pub async fn get_questions(&self, count: usize, age_band: AgeBand) -> QuestionSet {
        let set = self.fetch_pool(count, age_band).await;
        let questions = {
            let mut rng = rand::thread_rng();
            sampling::sample_unique(&set.questions, &QuestionHistory::default(), count, &mut rng)
        };
        QuestionSet {
            questions,
            source: set.source,
            model: set.model,
        }
    }

    fn fallback_pool(age_band: AgeBand) -> QuestionSet {
        let questions = question_banks::bank_for(age_band).to_vec();
        let questions = if questions.is_empty() {
            vec![question_banks::placeholder_question()]
        } else {
            questions
        };
        QuestionSet {
            questions,
            source: QuestionSource::Fallback,
            model: None,
        }
    }
}
