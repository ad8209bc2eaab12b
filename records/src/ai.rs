//! AI legal assistant payloads (`/ai/query`, `/ai/feedback`).

#[cfg(test)]
#[path = "ai_test.rs"]
mod ai_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Token budget requested by the Q&A page.
pub const QA_MAX_TOKENS: u32 = 500;
/// Number of cited sources requested by the chat page.
pub const CHAT_MAX_SOURCES: u32 = 5;

/// Body of `POST /ai/query`.
///
/// The backend accepts the question under either `query` or `query_text`;
/// the two portal surfaces historically use different keys and options, so
/// the constructors below pin each variant.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AiQueryRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_sources: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_context: Option<bool>,
}

impl AiQueryRequest {
    /// Q&A page request: `{query_text, max_tokens}`.
    #[must_use]
    pub fn legal_qa(question: &str) -> Self {
        Self { query_text: Some(question.trim().to_owned()), max_tokens: Some(QA_MAX_TOKENS), ..Self::default() }
    }

    /// Chat page request: `{query, max_sources, include_context}`.
    #[must_use]
    pub fn chat(question: &str) -> Self {
        Self {
            query: Some(question.trim().to_owned()),
            max_sources: Some(CHAT_MAX_SOURCES),
            include_context: Some(true),
            ..Self::default()
        }
    }

    /// The question text, whichever key carries it.
    #[must_use]
    pub fn question(&self) -> &str {
        self.query.as_deref().or(self.query_text.as_deref()).unwrap_or_default()
    }
}

/// A legal citation backing an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiSource {
    pub law_id: i64,
    #[serde(default)]
    pub article_id: Option<i64>,
    #[serde(default)]
    pub law_number: Option<String>,
    #[serde(default)]
    pub article_number: Option<String>,
    #[serde(default)]
    pub excerpt: String,
    /// Retrieval score; older backends call it `score`.
    #[serde(default, alias = "score", alias = "relevance_score")]
    pub match_score: f64,
}

impl AiSource {
    /// Short citation label, e.g. `Law 12-2024, Art. 1`.
    #[must_use]
    pub fn citation(&self) -> String {
        let law = self.law_number.clone().unwrap_or_else(|| format!("#{}", self.law_id));
        match (&self.article_number, self.article_id) {
            (Some(number), _) => format!("Law {law}, Art. {number}"),
            (None, Some(id)) => format!("Law {law}, Article #{id}"),
            (None, None) => format!("Law {law}"),
        }
    }
}

/// Response of `POST /ai/query`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiAnswer {
    pub answer_text: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub sources: Vec<AiSource>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub query_id: Option<String>,
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(_) => Err(D::Error::custom("expected string or number query_id")),
    }
}

/// Display bucket for an answer's confidence score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    #[must_use]
    pub fn from_score(confidence: f64) -> Self {
        if confidence >= 0.8 {
            Self::High
        } else if confidence >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High confidence",
            Self::Medium => "Medium confidence",
            Self::Low => "Low confidence",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Confidence as a rounded percentage in `0..=100`.
#[must_use]
pub fn confidence_percent(confidence: f64) -> u8 {
    if !confidence.is_finite() {
        return 0;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let pct = (confidence.clamp(0.0, 1.0) * 100.0).round() as u8;
    pct
}

/// Reader verdict on an answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackType {
    Useful,
    NotUseful,
    Incorrect,
}

impl FeedbackType {
    pub const ALL: [Self; 3] = [Self::Useful, Self::NotUseful, Self::Incorrect];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Useful => "useful",
            Self::NotUseful => "not_useful",
            Self::Incorrect => "incorrect",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Useful => "Useful",
            Self::NotUseful => "Not useful",
            Self::Incorrect => "Incorrect",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == raw.trim())
    }
}

/// Body of `POST /ai/feedback`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AiFeedbackRequest {
    pub query_id: String,
    pub feedback_type: FeedbackType,
}
