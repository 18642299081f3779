//! History-aware selection of question sets.
//!
//! Questions used in recent sessions are filtered out of the candidate pool
//! before shuffling, with recency weighting: the exclusion window starts at
//! the full history depth and is relaxed one session at a time, dropping the
//! oldest sessions' exclusions first, so a question used last game stays
//! filtered longest. As a last resort the full pool is reused rather than
//! returning fewer questions than available.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::domain::{QuestionHistory, TriviaQuestion};

/// Picks up to `count` questions from `pool`, avoiding texts seen in recent
/// history where possible. Never returns duplicate question texts; always
/// returns `min(count, |distinct pool|)` entries.
pub fn sample_unique<R: Rng + ?Sized>(
    pool: &[TriviaQuestion],
    history: &QuestionHistory,
    count: usize,
    rng: &mut R,
) -> Vec<TriviaQuestion> {
    let mut seen = HashSet::new();
    let distinct: Vec<&TriviaQuestion> = pool
        .iter()
        .filter(|q| seen.insert(q.question.as_str()))
        .collect();

    let mut candidates: Vec<&TriviaQuestion> = Vec::new();
    for window in (0..=history.len()).rev() {
        let excluded = history.recent_texts(window);
        candidates = distinct
            .iter()
            .copied()
            .filter(|q| !excluded.contains(q.question.as_str()))
            .collect();
        // window 0 means the full pool: the final fallback tier
        if candidates.len() >= count || window == 0 {
            break;
        }
    }

    let mut chosen: Vec<TriviaQuestion> = candidates.into_iter().cloned().collect();
    chosen.shuffle(rng);
    chosen.truncate(count);
    chosen
}
