use crate::models::domain::TriviaQuestion;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates `n` distinct Hebrew questions for sampling and session tests
    pub fn sample_questions(n: usize) -> Vec<TriviaQuestion> {
        (0..n)
            .map(|i| {
                TriviaQuestion::new(
                    &format!("שאלה מספר {}?", i),
                    &format!("תשובה {}", i),
                    &format!("רמז {}", i),
                )
            })
            .collect()
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_sample_questions() {
        let questions = sample_questions(3);
        assert_eq!(questions.len(), 3);
        assert!(questions.iter().all(|q| q.is_usable()));
        assert_ne!(questions[0].question, questions[1].question);
    }
}
