//! AI legal Q&A: one question at a time, history newest first.
//!
//! A failed question still produces an entry, carrying the canned
//! low-confidence answer, and no banner is raised.

#[cfg(test)]
#[path = "qa_test.rs"]
mod qa_test;

use leptos::logging::warn;
use records::{AiAnswer, AiQueryRequest};

use super::fixtures;
use crate::net::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct QaEntry {
    pub id: String,
    pub question: String,
    pub answer: AiAnswer,
    /// Unix milliseconds at which the answer arrived.
    pub answered_at: u64,
    /// The answer is the offline stand-in, not the assistant's.
    pub fallback: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QaState {
    pub history: Vec<QaEntry>,
    /// Question awaiting an answer.
    pub pending: Option<String>,
}

impl QaState {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Accept a question; `None` for blank input or while one is in flight.
    pub fn submit(&mut self, input: &str) -> Option<AiQueryRequest> {
        let question = input.trim();
        if question.is_empty() || self.is_busy() {
            return None;
        }
        self.pending = Some(question.to_owned());
        Some(AiQueryRequest::legal_qa(question))
    }

    /// Record the answer for the pending question at the top of the history.
    pub fn resolve(&mut self, outcome: Result<AiAnswer, ApiError>, now_ms: u64) {
        let Some(question) = self.pending.take() else {
            return;
        };
        let (answer, fallback) = match outcome {
            Ok(answer) => (answer, false),
            Err(error) => {
                warn!("AI query failed: {error}");
                (fixtures::ai_fallback_answer(), true)
            }
        };
        let id = answer.query_id.clone().unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
        self.history.insert(0, QaEntry { id, question, answer, answered_at: now_ms, fallback });
    }
}
