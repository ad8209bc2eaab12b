//! Legal documents (`/legal/laws`, `/legal/categories`).

#[cfg(test)]
#[path = "legal_test.rs"]
mod legal_test;

use serde::{Deserialize, Serialize};

use crate::query::{QueryString, ToQuery};

/// Default page size used by the paginated legal search.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// A law published in the official bulletin, with its articles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Law {
    pub law_id: i64,
    pub law_number: String,
    pub title: String,
    #[serde(default)]
    pub effective_date: String,
    #[serde(default)]
    pub issue_date: String,
    #[serde(default)]
    pub source_url: Option<String>,
    /// Articles in publication order.
    #[serde(default)]
    pub articles: Vec<Article>,
}

/// A numbered subsection of a [`Law`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: i64,
    pub article_number: String,
    pub content: String,
    pub law_id: i64,
}

/// Search-result row returned by the paginated legal search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LawSummary {
    pub law_id: i64,
    pub law_number: String,
    pub title: String,
    #[serde(default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub effective_date: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

/// One page of search results.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LawPage {
    pub items: Vec<LawSummary>,
    pub total: u64,
}

/// Filters shared by the legal repository and the legal search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LawQuery {
    pub q: String,
    pub from: String,
    pub to: String,
    pub category: String,
    pub ministry: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl LawQuery {
    /// True when no content filter is set (pagination is ignored).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        [&self.q, &self.from, &self.to, &self.category, &self.ministry]
            .iter()
            .all(|v| v.trim().is_empty())
    }
}

impl ToQuery for LawQuery {
    fn to_query(&self) -> QueryString {
        let mut query = QueryString::new();
        query
            .push_opt("page", self.page)
            .push_opt("page_size", self.page_size)
            .push("q", &self.q)
            .push("from", &self.from)
            .push("to", &self.to)
            .push("category", &self.category)
            .push("ministry", &self.ministry);
        query
    }
}

/// Number of pages needed to show `total` results; at least one.
#[must_use]
pub fn total_pages(total: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 1;
    }
    total.div_ceil(u64::from(page_size)).max(1)
}
