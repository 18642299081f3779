use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Bounded record of past sessions, oldest first. Each entry is the list of
/// question texts served in one session. This is the sole durable state used
/// to reduce repeats between games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuestionHistory {
    pub sessions: Vec<Vec<String>>,
}

impl QuestionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Append a session's question texts, evicting the oldest entries so at
    /// most `depth` sessions remain.
    pub fn record(&mut self, texts: Vec<String>, depth: usize) {
        self.sessions.push(texts);
        if self.sessions.len() > depth {
            let excess = self.sessions.len() - depth;
            self.sessions.drain(..excess);
        }
    }

    /// Question texts seen in the `window` most recent sessions.
    pub fn recent_texts(&self, window: usize) -> HashSet<&str> {
        self.sessions
            .iter()
            .rev()
            .take(window)
            .flatten()
            .map(String::as_str)
            .collect()
    }
}
