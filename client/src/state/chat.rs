//! AI chat transcript with per-answer feedback.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use records::{AiAnswer, AiFeedbackRequest, AiQueryRequest, AiSource, FeedbackType};

use super::fixtures;
use crate::net::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub confidence: Option<f64>,
    pub sources: Vec<AiSource>,
    pub query_id: Option<String>,
    /// Unix milliseconds.
    pub sent_at: u64,
    pub feedback: Option<FeedbackType>,
}

impl ChatMessage {
    fn new(role: Role, content: String, sent_at: u64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content,
            confidence: None,
            sources: Vec::new(),
            query_id: None,
            sent_at,
            feedback: None,
        }
    }

    /// Feedback buttons apply to answered assistant messages only.
    #[must_use]
    pub fn accepts_feedback(&self) -> bool {
        self.role == Role::Assistant && self.query_id.is_some() && self.feedback.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    /// Chronological transcript.
    pub messages: Vec<ChatMessage>,
    pub pending: bool,
    pub error: Option<String>,
}

impl ChatState {
    /// Append the user's message; `None` for blank input or while waiting.
    pub fn submit(&mut self, input: &str, now_ms: u64) -> Option<AiQueryRequest> {
        let question = input.trim();
        if question.is_empty() || self.pending {
            return None;
        }
        self.messages.push(ChatMessage::new(Role::User, question.to_owned(), now_ms));
        self.pending = true;
        self.error = None;
        Some(AiQueryRequest::chat(question))
    }

    pub fn resolve(&mut self, outcome: Result<AiAnswer, ApiError>, now_ms: u64) {
        if !self.pending {
            return;
        }
        self.pending = false;
        match outcome {
            Ok(answer) => {
                let mut message = ChatMessage::new(Role::Assistant, answer.answer_text, now_ms);
                message.confidence = Some(answer.confidence);
                message.sources = answer.sources;
                message.query_id = answer.query_id;
                self.messages.push(message);
            }
            Err(error) => {
                self.error = Some(format!("Failed to get an answer: {}", error.detail()));
                self.messages.push(ChatMessage::new(Role::Assistant, fixtures::CHAT_APOLOGY.to_owned(), now_ms));
            }
        }
    }

    /// Mark feedback on `message_id`; returns the request to send, once.
    pub fn give_feedback(&mut self, message_id: &str, feedback: FeedbackType) -> Option<AiFeedbackRequest> {
        let message = self.messages.iter_mut().find(|m| m.id == message_id)?;
        if !message.accepts_feedback() {
            return None;
        }
        message.feedback = Some(feedback);
        let query_id = message.query_id.clone()?;
        Some(AiFeedbackRequest { query_id, feedback_type: feedback })
    }

    /// Empty the transcript; an answer still in flight is dropped.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.pending = false;
        self.error = None;
    }
}
