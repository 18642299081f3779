use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::question::{AgeBand, TriviaQuestion};

/// In-memory state of one quiz run: the sampled question list, the cursor
/// into it and the running score. Created at session start, discarded after
/// the score summary is produced.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct GameSession {
    pub id: String,
    pub player: String,
    pub age_band: AgeBand,
    pub questions: Vec<TriviaQuestion>,
    pub current_index: usize,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl GameSession {
    pub fn new(player: &str, age_band: AgeBand, questions: Vec<TriviaQuestion>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            player: player.to_string(),
            age_band,
            questions,
            current_index: 0,
            score: 0,
            created_at: Some(Utc::now()),
        }
    }

    pub fn current_question(&self) -> Option<&TriviaQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Records the player's self-assessment for the current question and
    /// advances the cursor. Returns true when the session just completed.
    pub fn record_answer(&mut self, knew: bool) -> bool {
        if knew {
            self.score += 1;
        }
        self.current_index += 1;
        self.is_complete()
    }
}

/// Per-player saved progress, persisted after every answer so a session
/// survives a page reload. Opaque JSON blob keyed by player name; there is
/// no versioned migration path.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionProgress {
    pub session_id: String,
    pub age_band: AgeBand,
    pub questions: Vec<TriviaQuestion>,
    pub current_index: usize,
    pub score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&GameSession> for SessionProgress {
    fn from(session: &GameSession) -> Self {
        SessionProgress {
            session_id: session.id.clone(),
            age_band: session.age_band,
            questions: session.questions.clone(),
            current_index: session.current_index,
            score: session.score,
            updated_at: Some(Utc::now()),
        }
    }
}

impl SessionProgress {
    pub fn into_session(self, player: &str) -> GameSession {
        GameSession {
            id: self.session_id,
            player: player.to_string(),
            age_band: self.age_band,
            questions: self.questions,
            current_index: self.current_index,
            score: self.score,
            created_at: self.updated_at,
        }
    }
}

/// End-of-game feedback line, chosen by score fraction. The thresholds mirror
/// the 18/15/10/5-out-of-20 bands the game always used, scaled so shorter
/// sessions get the same spread.
pub fn score_message(score: u32, total: usize) -> &'static str {
    if total == 0 {
        return "זה בסדר, בפעם הבאה תצליח יותר!";
    }
    let fraction = score as f64 / total as f64;
    if fraction >= 0.9 {
        "מצוין! אתה ממש חכם!"
    } else if fraction >= 0.75 {
        "כל הכבוד! אתה יודע הרבה דברים!"
    } else if fraction >= 0.5 {
        "טוב מאוד! למדת דברים חדשים?"
    } else if fraction >= 0.25 {
        "נחמד! עכשיו אתה יודע יותר!"
    } else {
        "זה בסדר, בפעם הבאה תצליח יותר!"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn questions(n: usize) -> Vec<TriviaQuestion> {
        (0..n)
            .map(|i| TriviaQuestion::new(&format!("שאלה {}", i), &format!("תשובה {}", i), ""))
            .collect()
    }

    #[test]
    fn record_answer_scores_and_advances() {
        let mut session = GameSession::new("דני", AgeBand::Middle, questions(3));

        assert!(!session.record_answer(true));
        assert!(!session.record_answer(false));
        assert_eq!(session.score, 1);
        assert_eq!(session.current_index, 2);

        // last answer completes the session
        assert!(session.record_answer(true));
        assert!(session.is_complete());
        assert_eq!(session.score, 2);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn progress_round_trip_preserves_state() {
        let mut session = GameSession::new("נועה", AgeBand::Older, questions(5));
        session.record_answer(true);
        session.record_answer(false);

        let progress = SessionProgress::from(&session);
        let restored = progress.into_session("נועה");

        assert_eq!(restored.id, session.id);
        assert_eq!(restored.score, 1);
        assert_eq!(restored.current_index, 2);
        assert_eq!(restored.questions, session.questions);
    }

    #[test]
    fn score_message_bands() {
        assert_eq!(score_message(18, 20), "מצוין! אתה ממש חכם!");
        assert_eq!(score_message(15, 20), "כל הכבוד! אתה יודע הרבה דברים!");
        assert_eq!(score_message(10, 20), "טוב מאוד! למדת דברים חדשים?");
        assert_eq!(score_message(5, 20), "נחמד! עכשיו אתה יודע יותר!");
        assert_eq!(score_message(2, 20), "זה בסדר, בפעם הבאה תצליח יותר!");
        // scaled down to a short session
        assert_eq!(score_message(3, 3), "מצוין! אתה ממש חכם!");
        assert_eq!(score_message(0, 0), "זה בסדר, בפעם הבאה תצליח יותר!");
    }
}
