use super::state::SessionState;
use crate::error::{InterviewError, InterviewResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Questions served when no question set is configured
pub const DEFAULT_QUESTIONS: [&str; 5] = [
    "What is JavaScript and how is it used in web development?",
    "Can you explain the difference between var, let, and const in JavaScript?",
    "What are closures in JavaScript and how do they work?",
    "How does prototypal inheritance work in JavaScript?",
    "Can you explain event delegation in JavaScript?",
];

/// What the sequencer reports for a session's cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentQuestion {
    /// Question at the cursor, absent once the set is exhausted
    pub question: Option<String>,

    /// True iff the cursor has reached the end of the question set
    pub completed: bool,
}

/// Immutable, ordered set of interview questions
///
/// Doubles as the sequencer: it decides which question a session's cursor
/// points at and moves the cursor forward one question at a time.
#[derive(Debug, Clone)]
pub struct QuestionSet {
    questions: Arc<[String]>,
}

impl QuestionSet {
    /// Build a question set; blank questions and an empty set are rejected
    pub fn new<I, S>(questions: I) -> InterviewResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let questions: Vec<String> = questions.into_iter().map(Into::into).collect();

        if questions.is_empty() {
            return Err(InterviewError::InvalidInput(
                "question set must contain at least one question".to_string(),
            ));
        }

        if let Some(index) = questions.iter().position(|q| q.trim().is_empty()) {
            return Err(InterviewError::InvalidInput(format!(
                "question {} is blank",
                index
            )));
        }

        Ok(Self {
            questions: questions.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at `index`, or `OutOfRange` past the end
    pub fn get(&self, index: usize) -> InterviewResult<&str> {
        self.questions
            .get(index)
            .map(String::as_str)
            .ok_or(InterviewError::OutOfRange)
    }

    /// Current question for a session. Reads only.
    pub fn current(&self, state: &SessionState) -> CurrentQuestion {
        match self.questions.get(state.cursor()) {
            Some(question) => CurrentQuestion {
                question: Some(question.clone()),
                completed: false,
            },
            None => CurrentQuestion {
                question: None,
                completed: true,
            },
        }
    }

    pub fn is_completed(&self, state: &SessionState) -> bool {
        state.cursor() >= self.len()
    }

    /// Move the session to the next question
    ///
    /// Returns the new cursor. Fails with `OutOfRange` and leaves the
    /// cursor untouched when the set is already exhausted.
    pub fn advance(&self, state: &mut SessionState) -> InterviewResult<usize> {
        if self.is_completed(state) {
            return Err(InterviewError::OutOfRange);
        }

        state.cursor += 1;
        Ok(state.cursor)
    }
}

impl Default for QuestionSet {
    fn default() -> Self {
        Self {
            questions: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_questions() -> QuestionSet {
        QuestionSet::new(["Q1", "Q2"]).unwrap()
    }

    #[test]
    fn test_rejects_empty_set() {
        let result = QuestionSet::new(Vec::<String>::new());
        assert!(matches!(result, Err(InterviewError::InvalidInput(_))));
    }

    #[test]
    fn test_rejects_blank_question() {
        let result = QuestionSet::new(["Q1", "   "]);
        assert!(matches!(result, Err(InterviewError::InvalidInput(_))));
    }

    #[test]
    fn test_current_is_idempotent() {
        let questions = two_questions();
        let state = SessionState::new("s");

        let first = questions.current(&state);
        let second = questions.current(&state);

        assert_eq!(first, second);
        assert_eq!(first.question.as_deref(), Some("Q1"));
        assert!(!first.completed);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_advance_walks_in_order_then_stops() {
        let questions = two_questions();
        let mut state = SessionState::new("s");

        assert_eq!(questions.advance(&mut state), Ok(1));
        assert_eq!(questions.current(&state).question.as_deref(), Some("Q2"));

        assert_eq!(questions.advance(&mut state), Ok(2));
        let current = questions.current(&state);
        assert!(current.completed);
        assert!(current.question.is_none());

        assert_eq!(questions.advance(&mut state), Err(InterviewError::OutOfRange));
        assert_eq!(state.cursor(), 2);
    }

    #[test]
    fn test_get_by_index() {
        let questions = QuestionSet::default();
        assert_eq!(questions.len(), 5);
        assert_eq!(questions.get(0).unwrap(), DEFAULT_QUESTIONS[0]);
        assert_eq!(questions.get(5), Err(InterviewError::OutOfRange));
    }
}
