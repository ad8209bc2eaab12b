//! Shared record model for the civic portal API.
//!
//! This crate owns the JSON shapes exchanged with the backend and is used by
//! both `client` (browser) and `cli` (terminal). Records mirror the backend's
//! field names so serde round-trips stay lossless; the few aggregates the UI
//! shows (review stats, budget totals) are computed here so every surface
//! agrees on them.

pub mod ai;
pub mod budget;
pub mod citizen;
pub mod endpoints;
pub mod envelope;
pub mod gov;
pub mod legal;
pub mod query;
pub mod reviews;

pub use ai::{AiAnswer, AiFeedbackRequest, AiQueryRequest, AiSource, ConfidenceLevel, FeedbackType, confidence_percent};
pub use budget::{BudgetItem, BudgetQuery, BudgetSort, BudgetStatus, BudgetSummary, CategoryShare};
pub use citizen::{LoginForm, RegisterRequest, TokenResponse, User, UserRole};
pub use envelope::{ListEnvelope, decode_list, decode_page, error_detail};
pub use gov::{Institution, InstitutionQuery};
pub use legal::{Article, Law, LawPage, LawQuery, LawSummary};
pub use query::{ALL, QueryString, ToQuery};
pub use reviews::{NewReview, Review, ReviewCategory, ReviewQuery, ReviewSort, ReviewStats, ReviewStatus};

/// Errors produced while decoding or validating records.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecordsError {
    /// A list endpoint answered with JSON that is neither an array nor an
    /// `items`/`data` envelope of the expected record type.
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(String),
    /// A record failed client-side validation before submission.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}
