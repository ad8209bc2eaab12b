//! Citizen reviews of institutions and officials (`/reviews`).

#[cfg(test)]
#[path = "reviews_test.rs"]
mod reviews_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::RecordsError;
use crate::query::{QueryString, ToQuery};

/// What a review is about.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewCategory {
    #[default]
    Service,
    Responsiveness,
    Transparency,
    Corruption,
}

impl ReviewCategory {
    pub const ALL: [Self; 4] = [Self::Service, Self::Responsiveness, Self::Transparency, Self::Corruption];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Responsiveness => "responsiveness",
            Self::Transparency => "transparency",
            Self::Corruption => "corruption",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Service => "Service",
            Self::Responsiveness => "Responsiveness",
            Self::Transparency => "Transparency",
            Self::Corruption => "Corruption",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw.trim())
    }
}

/// Moderation status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub const ALL: [Self; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub institution: String,
    #[serde(default)]
    pub official_name: Option<String>,
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub category: ReviewCategory,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub created_at: String,
}

impl Review {
    /// Display name of the author.
    #[must_use]
    pub fn author(&self) -> &str {
        if self.is_anonymous {
            return "Anonymous";
        }
        self.user_name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or("Anonymous")
    }
}

/// Five-star rendering of a rating, clamped to 0..=5.
#[must_use]
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

/// Payload for `POST /reviews`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_name: Option<String>,
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub category: ReviewCategory,
    pub is_anonymous: bool,
}

impl Default for NewReview {
    fn default() -> Self {
        Self {
            institution: String::new(),
            official_name: None,
            rating: 5,
            title: String::new(),
            content: String::new(),
            category: ReviewCategory::Service,
            is_anonymous: false,
        }
    }
}

impl NewReview {
    /// Required-field presence and rating range.
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), RecordsError> {
        if self.institution.trim().is_empty() {
            return Err(RecordsError::Invalid { field: "institution", reason: "required" });
        }
        if !(1..=5).contains(&self.rating) {
            return Err(RecordsError::Invalid { field: "rating", reason: "must be between 1 and 5" });
        }
        if self.title.trim().is_empty() {
            return Err(RecordsError::Invalid { field: "title", reason: "required" });
        }
        if self.content.trim().is_empty() {
            return Err(RecordsError::Invalid { field: "content", reason: "required" });
        }
        Ok(())
    }

    /// The review as listed after a successful `POST /reviews`.
    ///
    /// A full record in `echo` is taken as-is. Otherwise the submitted
    /// fields are kept and only `id`, `status` and `created_at` are read
    /// from whatever the backend returned (possibly nothing).
    #[must_use]
    pub fn into_created(self, echo: Value) -> Review {
        if let Ok(review) = Review::deserialize(&echo) {
            return review;
        }
        let id = echo.get("id").and_then(Value::as_i64).unwrap_or_default();
        let status = echo.get("status").and_then(Value::as_str).and_then(ReviewStatus::parse).unwrap_or_default();
        let created_at = echo.get("created_at").and_then(Value::as_str).unwrap_or_default().to_owned();
        Review {
            id,
            institution: self.institution,
            official_name: self.official_name,
            rating: self.rating,
            title: self.title,
            content: self.content,
            category: self.category,
            status,
            user_name: None,
            is_anonymous: self.is_anonymous,
            created_at,
        }
    }
}

/// Server-side ordering of the review list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReviewSort {
    #[default]
    Newest,
    Oldest,
    Highest,
    Lowest,
}

impl ReviewSort {
    pub const ALL: [Self; 4] = [Self::Newest, Self::Oldest, Self::Highest, Self::Lowest];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Highest => "highest",
            Self::Lowest => "lowest",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest first",
            Self::Oldest => "Oldest first",
            Self::Highest => "Highest rated",
            Self::Lowest => "Lowest rated",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw.trim())
    }
}

/// Filters for the review listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewQuery {
    /// Institution name, or [`crate::ALL`].
    pub institution: String,
    /// Category value, or [`crate::ALL`].
    pub category: String,
    pub sort: ReviewSort,
}

impl Default for ReviewQuery {
    fn default() -> Self {
        Self { institution: crate::ALL.to_owned(), category: crate::ALL.to_owned(), sort: ReviewSort::Newest }
    }
}

impl ToQuery for ReviewQuery {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push_filter("institution", &self.institution)
            .push_filter("category", &self.category)
            .push("sort", self.sort.as_str());
        query
    }
}

/// Aggregates shown above the review list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReviewStats {
    pub total: usize,
    pub average_rating: f64,
    pub pending: usize,
    pub approved: usize,
}

impl ReviewStats {
    #[must_use]
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let total = reviews.len();
        let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_rating = if total == 0 { 0.0 } else { f64::from(sum) / total as f64 };
        Self {
            total,
            average_rating,
            pending: reviews.iter().filter(|r| r.status == ReviewStatus::Pending).count(),
            approved: reviews.iter().filter(|r| r.status == ReviewStatus::Approved).count(),
        }
    }
}

/// Distinct institution names in first-seen order.
#[must_use]
pub fn reviewed_institutions(reviews: &[Review]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for review in reviews {
        if !out.contains(&review.institution) {
            out.push(review.institution.clone());
        }
    }
    out
}
